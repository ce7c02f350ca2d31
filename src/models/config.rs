//! Server configuration
//!
//! Built once at startup and handed to the router; nothing reads the
//! environment after that.

use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::lookup_host;
use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{DEFAULT_DATA_PATH, DEFAULT_HOST, DEFAULT_PORT};

/// Configuration for the quiz API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Path of the CSV question bank
    pub data_path: PathBuf,

    /// Write the built-in sample bank when `data_path` does not exist
    pub seed_if_missing: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed_if_missing: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment
    ///
    /// - `QUIZ_HOST`: bind host (default `0.0.0.0`)
    /// - `PORT` / `QUIZ_PORT`: bind port (default `5000`)
    /// - `QUIZ_DATA_PATH`: question bank (default `data/questions.csv`)
    /// - `QUIZ_SEED_IF_MISSING`: `true`/`false` (default `true`)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("QUIZ_HOST").filter(|h| !h.is_empty()) {
            config.host = host;
        }

        // Hosting platforms set PORT, QUIZ_PORT is for local dev
        if let Some(port) = lookup("PORT").or_else(|| lookup("QUIZ_PORT")) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::invalid_config("PORT", &port))?;
        }

        if let Some(path) = lookup("QUIZ_DATA_PATH").filter(|p| !p.is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup("QUIZ_SEED_IF_MISSING") {
            config.seed_if_missing = parse_bool(&flag)
                .ok_or_else(|| AppError::invalid_config("QUIZ_SEED_IF_MISSING", &flag))?;
        }

        info!(
            data_path = %config.data_path.display(),
            seed_if_missing = config.seed_if_missing,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Address to bind the listener to; `QUIZ_HOST` may be an IP or a hostname
    pub async fn socket_addr(&self) -> AppResult<SocketAddr> {
        lookup_host((self.host.as_str(), self.port))
            .await
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| AppError::invalid_config("QUIZ_HOST", &self.host))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
