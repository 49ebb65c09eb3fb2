//! Configuration Module - TOML-based Client Configuration
//!
//! Loads and validates configuration from `config.toml`. Credentials
//! are never read from the file: they come from environment variables
//! (see `loader::load_credentials`).

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::adapters::api::client::{
  OvhClientConfig, OVH_API_CA_BASE_URL, OVH_API_EU_BASE_URL,
};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Client identity and logging.
  #[serde(default)]
  pub client: ClientSection,
  /// API endpoint settings.
  pub api: ApiConfig,
}

/// Client identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSection {
  /// Client name used in the `User-Agent` header.
  #[serde(default = "default_client_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for ClientSection {
  fn default() -> Self {
    Self {
      name: default_client_name(),
      log_level: default_log_level(),
    }
  }
}

/// API endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  /// `ovh-eu`, `ovh-ca`, or a literal versioned root URL.
  pub endpoint: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
}

impl ApiConfig {
  /// Resolve `endpoint` aliases to a root URL.
  pub fn root_url(&self) -> String {
    resolve_endpoint(&self.endpoint)
  }
}

impl AppConfig {
  /// Client settings derived from this configuration.
  pub fn client_config(&self) -> OvhClientConfig {
    OvhClientConfig {
      root_url: self.api.root_url(),
      timeout: Duration::from_secs(self.api.timeout_seconds),
      user_agent: format!("{}/{}", self.client.name, env!("CARGO_PKG_VERSION")),
    }
  }
}

/// Map a well-known endpoint alias to its root URL.
///
/// Unknown values are returned unchanged (minus a trailing `/`) so a
/// full URL can be configured directly.
pub fn resolve_endpoint(endpoint: &str) -> String {
  match endpoint.trim() {
    "ovh-eu" => OVH_API_EU_BASE_URL.to_string(),
    "ovh-ca" => OVH_API_CA_BASE_URL.to_string(),
    other => other.trim_end_matches('/').to_string(),
  }
}

// Default value functions for serde

fn default_client_name() -> String {
  env!("CARGO_PKG_NAME").to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_timeout() -> u64 {
  30
}
