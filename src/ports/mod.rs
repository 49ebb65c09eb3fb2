//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the signing client requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `Clock`: Local wall-clock time for timestamping
//! - `HttpTransport`: One request/response exchange over HTTP

pub mod clock;
pub mod transport;

pub use clock::Clock;
pub use transport::{HttpTransport, TransportRequest};
