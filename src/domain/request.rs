//! Per-call request values.
//!
//! `ApiRequest` is what the caller asks for; `SignedRequestContext` is
//! what the signer derives from it. Both live for a single call.

use super::credentials::Credentials;
use super::drift::TimeDrift;
use super::method::Method;
use super::signature;

/// A call as requested by the user of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// API-relative path, e.g. `/me`.
    pub path: String,
    /// Pre-serialized body. Empty when the call carries none.
    pub body: String,
}

impl ApiRequest {
    /// Build a request; an absent body becomes the empty string.
    pub fn new(method: Method, path: impl Into<String>, body: Option<&str>) -> Self {
        Self {
            method,
            path: path.into(),
            body: body.unwrap_or_default().to_string(),
        }
    }

    /// Whether a payload should be transmitted.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Everything the signer derives for one call.
///
/// The same `timestamp` feeds the signature and the `X-Ovh-Timestamp`
/// header, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequestContext {
    /// `root_url + path`, concatenated as-is.
    pub full_url: String,
    /// Drift-corrected epoch seconds.
    pub timestamp: i64,
    /// `$1$`-prefixed signature.
    pub signature: String,
}

impl SignedRequestContext {
    /// Derive the signing context for `request` at local time `now_local`.
    pub fn derive(
        request: &ApiRequest,
        credentials: &Credentials,
        root_url: &str,
        drift: TimeDrift,
        now_local: i64,
    ) -> Self {
        let full_url = format!("{root_url}{}", request.path);
        let timestamp = drift.corrected(now_local);
        let signature = signature::sign(
            credentials.application_secret(),
            credentials.consumer_key(),
            request.method,
            &full_url,
            &request.body,
            timestamp,
        );

        Self {
            full_url,
            timestamp,
            signature,
        }
    }
}
