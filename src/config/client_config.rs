//! Prediction client configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_PREDICTION_URL: &str = "http://127.0.0.1:5000/predict";

/// Prediction endpoint and HTTP client settings
#[derive(Debug, Clone)]
pub struct ClientEnvConfig {
    pub endpoint: Url,
    /// Total request timeout. `None` keeps the HTTP client's default.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientEnvConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_PREDICTION_URL).expect("default URL is valid"),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientEnvConfig {
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var("PREDICTION_URL")
            .unwrap_or_else(|_| DEFAULT_PREDICTION_URL.to_string());
        let endpoint = parse_endpoint(&endpoint)?;

        let request_timeout = match env::var("PREDICTION_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .context("Failed to parse PREDICTION_TIMEOUT_SECS")?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        let user_agent =
            env::var("PREDICTION_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Ok(Self {
            endpoint,
            request_timeout,
            user_agent,
        })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }
}

/// Accepts absolute http(s) URLs only
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("Invalid PREDICTION_URL: {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!(
            "Invalid PREDICTION_URL scheme: {}. Must be 'http' or 'https'",
            other
        ),
    }
}

fn default_user_agent() -> String {
    format!("heartcheck/{}", env!("CARGO_PKG_VERSION"))
}
