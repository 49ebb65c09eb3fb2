//! Client Error Types
//!
//! A single error enum for everything that can go wrong once the
//! client is built. Time-sync failures are represented here too, but
//! they never escape construction: the clock synchronizer swallows
//! them and falls back to a zero drift.

use thiserror::Error;

/// Errors surfaced by the signed API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A signed header could not be encoded for the wire.
    #[error("failed to encode signed header {header}: {reason}")]
    Signing {
        /// Header that failed to encode.
        header: String,
        /// Encoder message.
        reason: String,
    },

    /// Connection, I/O or protocol failure in the transport.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    ///
    /// The body is kept verbatim; it is never parsed or classified.
    #[error("API returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The time endpoint returned something that is not an integer.
    #[error("time endpoint returned a non-integer body: {body:?}")]
    InvalidServerTime {
        /// Raw response body.
        body: String,
    },
}

impl ApiError {
    /// HTTP status code when the API itself rejected the request.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_raw_body() {
        let err = ApiError::Status {
            status: 403,
            body: r#"{"message":"Invalid signature"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("Invalid signature"));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = ApiError::InvalidServerTime {
            body: "soon".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
