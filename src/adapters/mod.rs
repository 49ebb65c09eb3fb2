//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies, and hosts the API client built on them.
//!
//! Adapter categories:
//! - `api`: OVH REST client and clock synchronizer
//! - `clock`: System wall clock
//! - `http`: reqwest-based HTTP transport

pub mod api;
pub mod clock;
pub mod http;
