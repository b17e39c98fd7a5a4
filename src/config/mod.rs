//! Configuration module for heartcheck.
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! the binaries before this runs).

mod client_config;

pub use client_config::{ClientEnvConfig, DEFAULT_PREDICTION_URL, parse_endpoint};

use anyhow::Result;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub client: ClientEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: ClientEnvConfig::from_env()?,
        })
    }
}
