//! Domain layer - Signing protocol and request values.
//!
//! Pure code: no I/O, no clocks, no HTTP. Everything here is a
//! function of its arguments so the signing contract can be tested
//! byte for byte.

pub mod credentials;
pub mod drift;
pub mod method;
pub mod request;
pub mod signature;

// Re-export core types for convenience
pub use credentials::Credentials;
pub use drift::TimeDrift;
pub use method::Method;
pub use request::{ApiRequest, SignedRequestContext};
pub use signature::{SignatureScheme, SignatureVersion, Sha1Scheme};
