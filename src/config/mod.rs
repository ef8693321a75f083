//! Configuration module for the positions dashboard.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::DashboardError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the positions REST API, without trailing slash
    pub api_base_url: String,
    /// Address to bind the dashboard server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
    /// File holding the bearer token; in-memory session when unset
    pub token_path: Option<PathBuf>,
    /// Token to seed the session with at startup
    pub api_token: Option<String>,
    /// Per-request timeout; transport default when unset
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, DashboardError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("DASHBOARD_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/api".to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = env::var("DASHBOARD_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| {
                DashboardError::Config(format!("Invalid DASHBOARD_BIND_ADDR format: {}", e))
            })?;

        let log_level = env::var("DASHBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("DASHBOARD_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let token_path = env::var("DASHBOARD_TOKEN_PATH").ok().map(PathBuf::from);

        let api_token = env::var("DASHBOARD_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let request_timeout = match env::var("DASHBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|e| {
                    DashboardError::Config(format!(
                        "Invalid DASHBOARD_REQUEST_TIMEOUT_SECS value: {}",
                        e
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_base_url,
            bind_addr,
            log_level,
            log_json,
            token_path,
            api_token,
            request_timeout,
        })
    }
}
