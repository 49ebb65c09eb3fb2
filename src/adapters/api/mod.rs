//! OVH REST API Adapter
//!
//! Implements the signed client for the OVH REST API on top of the
//! transport and clock ports.
//!
//! Sub-modules:
//! - `client`: Signed GET/PUT/POST/DELETE calls
//! - `time_sync`: One-shot server clock drift measurement

pub mod client;
pub mod time_sync;

pub use client::{OvhClient, OvhClientConfig};
pub use time_sync::ClockSynchronizer;
