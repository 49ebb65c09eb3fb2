//! Clock Synchronizer — One-shot Server Time Fetch
//!
//! Asks the API for its clock once, at client construction, and turns
//! the answer into a `TimeDrift`. This path is fail-open: an
//! unreachable endpoint or a garbage body degrades to zero drift with
//! a warning instead of failing construction. Signatures are then only
//! accepted if the local clock happens to be right.
//!
//! The local clock is sampled just before the request goes out, so
//! network latency shows up as extra positive drift.

use tracing::{info, instrument, warn};

use crate::domain::{Method, TimeDrift};
use crate::error::{ApiError, Result};
use crate::ports::{Clock, HttpTransport, TransportRequest};

/// API-relative path of the time endpoint.
pub const TIME_PATH: &str = "/auth/time";

/// Measures drift between the local clock and the API server.
pub struct ClockSynchronizer<'a> {
  /// Transport for the unauthenticated time request.
  transport: &'a dyn HttpTransport,
  /// Local time source.
  clock: &'a dyn Clock,
}

impl<'a> ClockSynchronizer<'a> {
  /// Borrow the transport and clock the client will use for calls.
  pub fn new(transport: &'a dyn HttpTransport, clock: &'a dyn Clock) -> Self {
    Self { transport, clock }
  }

  /// Fetch server time from `time_url` and return `local - server`,
  /// with `local` read before the request is sent.
  ///
  /// Never fails: any error yields `TimeDrift::ZERO`.
  #[instrument(skip(self))]
  pub async fn compute_drift(&self, time_url: &str) -> TimeDrift {
    let local = self.clock.now_epoch_secs();
    match self.server_time(time_url).await {
      Ok(server) => {
        let drift = TimeDrift::between(local, server);
        info!(
          server_time = server,
          local_time = local,
          drift_secs = drift.as_secs(),
          "Clock drift measured"
        );
        drift
      }
      Err(e) => {
        warn!(
          error = %e,
          "Server time unavailable — signing with uncorrected local clock"
        );
        TimeDrift::ZERO
      }
    }
  }

  /// One unauthenticated GET, body parsed as epoch seconds.
  async fn server_time(&self, time_url: &str) -> Result<i64> {
    let body = self
      .transport
      .execute(TransportRequest::new(Method::Get, time_url))
      .await?;
    parse_server_time(&body)
  }
}

/// Parse a plain-text epoch-seconds body, ignoring surrounding whitespace.
///
/// # Errors
/// Returns `ApiError::InvalidServerTime` for anything but an integer.
pub fn parse_server_time(body: &str) -> Result<i64> {
  body
    .trim()
    .parse()
    .map_err(|_| ApiError::InvalidServerTime {
      body: body.to_string(),
    })
}
