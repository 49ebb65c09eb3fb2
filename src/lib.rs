//! OVH API Client — Library Root
//!
//! Signed REST calls against the OVH API with one-shot server clock
//! drift compensation.
//!
//! ```no_run
//! use ovh_api_client::{Credentials, OvhClient, OvhClientConfig};
//!
//! # async fn example() -> ovh_api_client::Result<()> {
//! let credentials = Credentials::new("app-key", "app-secret", "consumer-key");
//! let client = OvhClient::connect(OvhClientConfig::default(), credentials).await?;
//! let me = client.get("/me").await?;
//! println!("{me}");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::api::{OvhClient, OvhClientConfig};
pub use domain::{Credentials, Method, TimeDrift};
pub use error::{ApiError, Result};
