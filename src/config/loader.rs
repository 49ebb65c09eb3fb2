//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters, and
//! reading the API credentials from the environment.

use std::path::Path;

use anyhow::{Context, Result};
use super::AppConfig;
use crate::domain::Credentials;

/// Environment variable holding the application key.
pub const ENV_APPLICATION_KEY: &str = "OVH_APPLICATION_KEY";
/// Environment variable holding the application secret.
pub const ENV_APPLICATION_SECRET: &str = "OVH_APPLICATION_SECRET";
/// Environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "OVH_CONSUMER_KEY";

/// Load and validate configuration from a TOML file.
///
/// Does not log: it runs before the tracing subscriber exists, whose
/// level comes from this very file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Returns an error if parsing fails or validation rules are violated.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A non-empty http(s) API root after alias resolution
/// - A positive request timeout
/// - A non-empty client name
fn validate_config(config: &AppConfig) -> Result<()> {
  let root_url = config.api.root_url();
  anyhow::ensure!(!root_url.is_empty(), "API endpoint must not be empty");
  anyhow::ensure!(
    root_url.starts_with("https://") || root_url.starts_with("http://"),
    "API endpoint must be ovh-eu, ovh-ca or an http(s) URL, got {}",
    config.api.endpoint
  );

  anyhow::ensure!(
    config.api.timeout_seconds > 0,
    "timeout_seconds must be positive"
  );

  anyhow::ensure!(
    !config.client.name.trim().is_empty(),
    "Client name must not be empty"
  );

  Ok(())
}

/// Load credentials from environment variables.
///
/// Required env vars: OVH_APPLICATION_KEY, OVH_APPLICATION_SECRET,
/// OVH_CONSUMER_KEY.
///
/// # Errors
/// Returns an error naming the first missing variable.
pub fn load_credentials() -> Result<Credentials> {
  credentials_from(|name| std::env::var(name).ok())
}

/// Build credentials from any key lookup (env, test fixtures).
fn credentials_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
  let read = |name: &str| {
    lookup(name)
      .filter(|v| !v.is_empty())
      .with_context(|| format!("{name} not set"))
  };

  Ok(Credentials::new(
    read(ENV_APPLICATION_KEY)?,
    read(ENV_APPLICATION_SECRET)?,
    read(ENV_CONSUMER_KEY)?,
  ))
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;
  use crate::adapters::api::client::{OVH_API_CA_BASE_URL, OVH_API_EU_BASE_URL};

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("ovh-api-client-{}.toml", std::process::id()));
    std::fs::write(&path, "[api]\nendpoint = \"ovh-ca\"\ntimeout_seconds = 7\n").unwrap();

    let config = load_config(path.to_str().unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.api.root_url(), OVH_API_CA_BASE_URL);
    assert_eq!(config.api.timeout_seconds, 7);
  }

  #[test]
  fn test_alias_endpoints_resolve() {
    let config = parse_config("[api]\nendpoint = \"ovh-eu\"\n").unwrap();
    assert_eq!(config.api.root_url(), OVH_API_EU_BASE_URL);
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.client.log_level, "info");

    let config = parse_config("[api]\nendpoint = \"ovh-ca\"\n").unwrap();
    assert_eq!(config.api.root_url(), OVH_API_CA_BASE_URL);
  }

  #[test]
  fn test_literal_endpoint_drops_trailing_slash() {
    let config =
      parse_config("[api]\nendpoint = \"https://api.example/1.0/\"\n").unwrap();
    assert_eq!(config.api.root_url(), "https://api.example/1.0");
  }

  #[test]
  fn test_client_config_user_agent() {
    let config = parse_config(
      "[client]\nname = \"billing-sync\"\n\n[api]\nendpoint = \"ovh-eu\"\ntimeout_seconds = 5\n",
    )
    .unwrap();
    let client = config.client_config();
    assert!(client.user_agent.starts_with("billing-sync/"));
    assert_eq!(client.timeout.as_secs(), 5);
  }

  #[test]
  fn test_rejects_bad_endpoint_and_timeout() {
    assert!(parse_config("[api]\nendpoint = \"ovh-mars\"\n").is_err());
    assert!(parse_config("[api]\nendpoint = \"ovh-eu\"\ntimeout_seconds = 0\n").is_err());
    assert!(parse_config("[client]\nname = \"x\"\n").is_err());
  }

  #[test]
  fn test_credentials_from_lookup() {
    let env: HashMap<&str, &str> = HashMap::from([
      (ENV_APPLICATION_KEY, "ak"),
      (ENV_APPLICATION_SECRET, "as"),
      (ENV_CONSUMER_KEY, "ck"),
    ]);
    let creds = credentials_from(|k| env.get(k).map(|v| (*v).to_string())).unwrap();
    assert_eq!(creds.application_key(), "ak");
    assert_eq!(creds.application_secret(), "as");
    assert_eq!(creds.consumer_key(), "ck");
  }

  #[test]
  fn test_missing_credential_is_named() {
    let err = credentials_from(|k| (k != ENV_CONSUMER_KEY).then(|| "x".to_string()))
      .unwrap_err();
    assert!(err.to_string().contains(ENV_CONSUMER_KEY));
  }
}
