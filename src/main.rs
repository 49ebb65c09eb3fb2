//! OVH API Client — Command Line Entry Point
//!
//! Wiring sequence:
//! 1. Parse CLI arguments
//! 2. Load config.toml + validate
//! 3. Init tracing (JSON structured logging on stderr)
//! 4. Load credentials from env vars (OVH_APPLICATION_KEY, OVH_APPLICATION_SECRET, OVH_CONSUMER_KEY)
//! 5. Build OvhClient (measures clock drift once)
//! 6. Run one signed call and print the raw body on stdout

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ovh_api_client::config::loader::{load_config, load_credentials};
use ovh_api_client::{Method, OvhClient};

/// Signed calls against the OVH REST API
#[derive(Parser)]
#[command(name = "ovh-api-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    /// Re-indent JSON responses
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Signed GET
    Get {
        /// API-relative path, e.g. /me
        path: String,
    },
    /// Signed PUT
    Put {
        /// API-relative path
        path: String,
        /// JSON body, `@file` to read a file, `-` for stdin
        body: String,
    },
    /// Signed POST
    Post {
        /// API-relative path
        path: String,
        /// JSON body, `@file` to read a file, `-` for stdin
        body: String,
    },
    /// Signed DELETE
    Delete {
        /// API-relative path
        path: String,
    },
    /// Signed call with the method given as an argument
    Call {
        /// GET, PUT, POST or DELETE (any case)
        method: Method,
        /// API-relative path
        path: String,
        /// Optional JSON body, `@file` to read a file, `-` for stdin
        body: Option<String>,
    },
    /// Print the measured clock drift in seconds
    Drift,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── 1. Load configuration from config.toml ──────────────
    let config = load_config(&cli.config).context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.client.log_level)),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        path = %cli.config,
        root_url = %config.api.root_url(),
        timeout_seconds = config.api.timeout_seconds,
        "Configuration loaded successfully"
    );

    // ── 3. Credentials from env, never from config.toml ────
    let credentials = load_credentials().context("Failed to load API credentials from env")?;

    // ── 4. Build client (one-shot time sync) ────────────────
    let client = OvhClient::connect(config.client_config(), credentials)
        .await
        .context("Failed to create API client")?;

    info!(
        root_url = client.root_url(),
        drift_secs = client.time_drift().as_secs(),
        "Client ready"
    );

    // ── 5. Execute the requested call ───────────────────────
    let (method, path, body) = match cli.command {
        Commands::Drift => {
            println!("{}", client.time_drift().as_secs());
            return Ok(());
        }
        Commands::Get { path } => (Method::Get, path, None),
        Commands::Delete { path } => (Method::Delete, path, None),
        Commands::Put { path, body } => (Method::Put, path, Some(read_body(&body)?)),
        Commands::Post { path, body } => (Method::Post, path, Some(read_body(&body)?)),
        Commands::Call { method, path, body } => {
            let body = body.as_deref().map(read_body).transpose()?;
            (method, path, body)
        }
    };

    let response = client
        .call(method, &path, body.as_deref())
        .await
        .with_context(|| format!("{method} {path} failed"))?;

    let output = if cli.pretty {
        pretty_json(&response).unwrap_or(response)
    } else {
        response
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

/// Resolve a body argument: literal text, `@path`, or `-` for stdin.
fn read_body(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("Failed to read body from stdin")?;
        return Ok(body);
    }

    match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read body file: {path}")),
        None => Ok(arg.to_string()),
    }
}

/// Re-indent a JSON body; `None` if it is not JSON.
fn pretty_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_parses_method_case_insensitively() {
        let cli = Cli::try_parse_from(["ovh-api-client", "call", "post", "/me", r#"{"a":1}"#]).unwrap();
        match cli.command {
            Commands::Call { method, path, body } => {
                assert_eq!(method, Method::Post);
                assert_eq!(path, "/me");
                assert_eq!(body.as_deref(), Some(r#"{"a":1}"#));
            }
            _ => panic!("expected call subcommand"),
        }
    }

    #[test]
    fn test_call_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["ovh-api-client", "call", "PATCH", "/me"]).is_err());
    }

    #[test]
    fn test_call_body_is_optional() {
        let cli = Cli::try_parse_from(["ovh-api-client", "call", "GET", "/me"]).unwrap();
        assert!(matches!(cli.command, Commands::Call { body: None, .. }));
    }
}
