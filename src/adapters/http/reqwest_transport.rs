//! Reqwest Transport — One Connection per Exchange
//!
//! Implements the `HttpTransport` port on top of reqwest with rustls.
//! Idle connections are not pooled: every call opens its own
//! connection and drops it once the body has been read.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::domain::Method;
use crate::error::{ApiError, Result};
use crate::ports::{HttpTransport, TransportRequest};

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  /// Underlying HTTP client.
  http: Client,
}

impl ReqwestTransport {
  /// Build a transport whose requests give up after `timeout`.
  ///
  /// # Errors
  /// Returns `ApiError::ClientBuild` if the TLS backend cannot start.
  pub fn new(timeout: Duration) -> Result<Self> {
    let http = Client::builder()
      .timeout(timeout)
      .pool_max_idle_per_host(0)
      .build()
      .map_err(ApiError::ClientBuild)?;

    Ok(Self { http })
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  async fn execute(&self, request: TransportRequest) -> Result<String> {
    let headers = header_map(&request.headers)?;

    let mut builder = self
      .http
      .request(reqwest_method(request.method), &request.url)
      .headers(headers);

    if let Some(body) = request.body {
      builder = builder.body(body.into_bytes());
    }

    let response = builder.send().await?;
    let status = response.status();
    // Lossy: invalid UTF-8 becomes U+FFFD.
    let body = response.text().await?;

    debug!(
      status = status.as_u16(),
      bytes = body.len(),
      "HTTP exchange complete"
    );

    if !status.is_success() {
      return Err(ApiError::Status {
        status: status.as_u16(),
        body,
      });
    }

    Ok(body)
  }
}

fn reqwest_method(method: Method) -> reqwest::Method {
  match method {
    Method::Get => reqwest::Method::GET,
    Method::Put => reqwest::Method::PUT,
    Method::Post => reqwest::Method::POST,
    Method::Delete => reqwest::Method::DELETE,
  }
}

/// Encode header pairs; a value that is not a valid header is a
/// signing failure since every header we send is part of the auth set.
fn header_map(pairs: &[(String, String)]) -> Result<HeaderMap> {
  let mut headers = HeaderMap::with_capacity(pairs.len());

  for (name, value) in pairs {
    let encoding_error = |reason: String| ApiError::Signing {
      header: name.clone(),
      reason,
    };
    let header_name = HeaderName::from_bytes(name.as_bytes())
      .map_err(|e| encoding_error(e.to_string()))?;
    let header_value =
      HeaderValue::from_str(value).map_err(|e| encoding_error(e.to_string()))?;
    headers.insert(header_name, header_value);
  }

  Ok(headers)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_header_map_encodes_auth_headers() {
    let pairs = vec![
      ("X-Ovh-Timestamp".to_string(), "1950".to_string()),
      (
        "Content-type".to_string(),
        "application/json; charset=utf8".to_string(),
      ),
    ];
    let headers = header_map(&pairs).unwrap();
    assert_eq!(headers.get("x-ovh-timestamp").unwrap(), "1950");
    assert_eq!(
      headers.get("content-type").unwrap(),
      "application/json; charset=utf8"
    );
  }

  #[test]
  fn test_header_map_rejects_control_characters() {
    let pairs = vec![("X-Ovh-Consumer".to_string(), "bad\nkey".to_string())];
    let err = header_map(&pairs).unwrap_err();
    assert!(matches!(err, ApiError::Signing { ref header, .. } if header == "X-Ovh-Consumer"));
  }

  #[test]
  fn test_method_mapping() {
    assert_eq!(reqwest_method(Method::Delete), reqwest::Method::DELETE);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
  }
}
