//! OVH API Client - Signed REST Calls
//!
//! Wraps an `HttpTransport` with the OVH authentication scheme: every
//! call carries the application key, the consumer key, a drift-corrected
//! timestamp and a `$1$` SHA-1 signature over the request.
//!
//! Error paths are deliberately asymmetric:
//! - construction is fail-open (time sync falls back to zero drift)
//! - calls are fail-closed (every transport error reaches the caller)
//!
//! Known limitation: drift is measured once in `connect` and never
//! refreshed. Rebuild the client to pick up a new offset.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use super::time_sync::{ClockSynchronizer, TIME_PATH};
use crate::adapters::clock::SystemClock;
use crate::adapters::http::ReqwestTransport;
use crate::domain::{ApiRequest, Credentials, Method, SignedRequestContext, TimeDrift};
use crate::error::Result;
use crate::ports::{Clock, HttpTransport, TransportRequest};

/// Root of the European API.
pub const OVH_API_EU_BASE_URL: &str = "https://eu.api.ovh.com/1.0";
/// Root of the Canadian API.
pub const OVH_API_CA_BASE_URL: &str = "https://ca.api.ovh.com/1.0";

/// Media type sent in both `Content-type` and `Accept`.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf8";

pub const HEADER_APPLICATION: &str = "X-Ovh-Application";
pub const HEADER_TIMESTAMP: &str = "X-Ovh-Timestamp";
pub const HEADER_CONSUMER: &str = "X-Ovh-Consumer";
pub const HEADER_SIGNATURE: &str = "X-Ovh-Signature";
pub const HEADER_CONTENT_TYPE: &str = "Content-type";
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_USER_AGENT: &str = "User-Agent";

/// `<crate-name>/<version>`.
pub fn default_user_agent() -> String {
  format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Configuration for the OVH client.
#[derive(Debug, Clone)]
pub struct OvhClientConfig {
  /// Versioned API root, e.g. `https://eu.api.ovh.com/1.0`.
  pub root_url: String,
  /// Per-request timeout enforced by the transport.
  pub timeout: Duration,
  /// Value of the `User-Agent` header.
  pub user_agent: String,
}

impl OvhClientConfig {
  /// Defaults with a specific API root.
  pub fn new(root_url: impl Into<String>) -> Self {
    Self {
      root_url: root_url.into(),
      ..Self::default()
    }
  }
}

impl Default for OvhClientConfig {
  fn default() -> Self {
    Self {
      root_url: OVH_API_EU_BASE_URL.to_string(),
      timeout: Duration::from_secs(30),
      user_agent: default_user_agent(),
    }
  }
}

/// Signed client for the OVH REST API.
///
/// Holds only immutable state after construction, so one instance can
/// serve any number of sequential or concurrent calls; each call
/// derives its own `SignedRequestContext`.
pub struct OvhClient {
  /// Transport performing the HTTP exchange.
  transport: Arc<dyn HttpTransport>,
  /// Local time source for timestamps.
  clock: Arc<dyn Clock>,
  /// Application and consumer keys.
  credentials: Credentials,
  /// Versioned API root.
  root_url: String,
  /// `User-Agent` header value.
  user_agent: String,
  /// Local minus server clock, measured once.
  time_drift: TimeDrift,
}

impl OvhClient {
  /// Build a reqwest-backed client and measure clock drift.
  ///
  /// Time-sync failures do not fail this call; only an unusable HTTP
  /// stack does.
  ///
  /// # Errors
  /// Returns `ApiError::ClientBuild` if the HTTP client cannot be built.
  pub async fn connect(config: OvhClientConfig, credentials: Credentials) -> Result<Self> {
    let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
    Ok(Self::with_transport(config, credentials, transport, Arc::new(SystemClock)).await)
  }

  /// Build a client on an arbitrary transport and clock.
  ///
  /// Performs the single time-sync request through `transport`.
  pub async fn with_transport(
    config: OvhClientConfig,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
    clock: Arc<dyn Clock>,
  ) -> Self {
    let time_url = format!("{}{TIME_PATH}", config.root_url);
    let time_drift = ClockSynchronizer::new(transport.as_ref(), clock.as_ref())
      .compute_drift(&time_url)
      .await;

    Self {
      transport,
      clock,
      credentials,
      root_url: config.root_url,
      user_agent: config.user_agent,
      time_drift,
    }
  }

  /// Sign and execute a request, returning the raw response body.
  ///
  /// An absent body is signed as the empty string and no payload is
  /// sent. There is no retry: a failure is returned as-is.
  ///
  /// # Errors
  /// Returns `ApiError::Transport` / `ApiError::Status` on network or
  /// HTTP failure, `ApiError::Signing` if a header cannot be encoded.
  #[instrument(skip_all, fields(method = %method, path = %path))]
  pub async fn call(&self, method: Method, path: &str, body: Option<&str>) -> Result<String> {
    let request = ApiRequest::new(method, path, body);
    let context = SignedRequestContext::derive(
      &request,
      &self.credentials,
      &self.root_url,
      self.time_drift,
      self.clock.now_epoch_secs(),
    );

    debug!(
      timestamp = context.timestamp,
      body_bytes = request.body.len(),
      "Sending signed request"
    );

    let response = self
      .transport
      .execute(self.transport_request(request, context))
      .await
      .inspect_err(|e| warn!(error = %e, "Signed request failed"))?;

    debug!(response_bytes = response.len(), "Signed request complete");
    Ok(response)
  }

  /// Attach auth headers to a signed request.
  fn transport_request(
    &self,
    request: ApiRequest,
    context: SignedRequestContext,
  ) -> TransportRequest {
    let body = request.has_body().then_some(request.body);

    let headers = vec![
      (
        HEADER_APPLICATION.to_string(),
        self.credentials.application_key().to_string(),
      ),
      (HEADER_TIMESTAMP.to_string(), context.timestamp.to_string()),
      (
        HEADER_CONSUMER.to_string(),
        self.credentials.consumer_key().to_string(),
      ),
      (HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string()),
      (HEADER_ACCEPT.to_string(), CONTENT_TYPE_JSON.to_string()),
      (HEADER_SIGNATURE.to_string(), context.signature),
      (HEADER_USER_AGENT.to_string(), self.user_agent.clone()),
    ];

    TransportRequest {
      method: request.method,
      url: context.full_url,
      headers,
      body,
    }
  }

  /// Execute a GET.
  pub async fn get(&self, path: &str) -> Result<String> {
    self.call(Method::Get, path, None).await
  }

  /// Execute a PUT with a pre-serialized body.
  pub async fn put(&self, path: &str, body: &str) -> Result<String> {
    self.call(Method::Put, path, Some(body)).await
  }

  /// Execute a POST with a pre-serialized body.
  pub async fn post(&self, path: &str, body: &str) -> Result<String> {
    self.call(Method::Post, path, Some(body)).await
  }

  /// Execute a DELETE.
  pub async fn delete(&self, path: &str) -> Result<String> {
    self.call(Method::Delete, path, None).await
  }

  /// Versioned API root.
  pub fn root_url(&self) -> &str {
    &self.root_url
  }

  /// Application key.
  pub fn application_key(&self) -> &str {
    self.credentials.application_key()
  }

  /// Application secret.
  pub fn application_secret(&self) -> &str {
    self.credentials.application_secret()
  }

  /// Consumer key.
  pub fn consumer_key(&self) -> &str {
    self.credentials.consumer_key()
  }

  /// Drift measured at construction (zero if time sync failed).
  pub const fn time_drift(&self) -> TimeDrift {
    self.time_drift
  }
}
