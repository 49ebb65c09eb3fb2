//! HTTP Transport Port - Wire Exchange Interface
//!
//! Defines the single operation the client needs from an HTTP stack:
//! send one request, read the whole response body. Connection
//! handling, TLS and redirects are the adapter's business.
//!
//! Key design decisions:
//! - Body returned as one in-memory `String` (no streaming)
//! - Non-2xx statuses are errors at this layer, carrying the raw body
//! - No retries: one `execute` is one network exchange

use async_trait::async_trait;

use crate::domain::Method;
use crate::error::Result;

/// A fully prepared outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Header name/value pairs, sent in order.
    pub headers: Vec<(String, String)>,
    /// UTF-8 payload. `None` means no body is sent at all.
    pub body: Option<String>,
}

impl TransportRequest {
    /// Bare request without headers or body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for HTTP transports.
///
/// Implementors perform exactly one exchange per call and release the
/// connection once the body is read or an error occurs.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    /// Send `request` and return the complete response body.
    ///
    /// The body is decoded as UTF-8 lossily: invalid byte sequences come
    /// back as U+FFFD rather than failing the call.
    ///
    /// # Errors
    /// Returns an error on connection/I/O failure or a non-2xx status.
    async fn execute(&self, request: TransportRequest) -> Result<String>;
}
