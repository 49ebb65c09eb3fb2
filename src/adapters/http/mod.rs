//! HTTP Transport Adapters
//!
//! Concrete implementations of the `HttpTransport` port.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
