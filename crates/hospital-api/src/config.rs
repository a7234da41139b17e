//! Server configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Hospital Records API";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BIND_ADDR_VAR: &str = "HOSPITAL_BIND_ADDR";
pub const DB_PATH_VAR: &str = "HOSPITAL_DB_PATH";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DB_PATH: &str = "hospital.db";

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,hospital_api=debug,hospital_core=debug"
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset or blank values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = read(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            database_path: PathBuf::from(read(DB_PATH_VAR, DEFAULT_DB_PATH)),
        })
    }
}
