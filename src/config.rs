//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use thiserror::Error;

/// Value of `REDIS_URL` selecting the in-process cache backend.
pub const MEMORY_CACHE_URL: &str = "memory://";

/// Configuration errors detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing env: {0}")]
    Missing(&'static str),
}

/// Where listing responses are cached, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheSettings {
    /// No cache backend configured
    Disabled,
    /// In-process TTL map
    Memory,
    /// Redis at the given URL
    Redis(String),
}

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Upper bound on pooled store connections
    pub database_max_connections: u32,
    /// Cache backend selection
    pub cache: CacheSettings,
    /// HTTP server port
    pub server_port: u16,
    /// In-process cache cleanup interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATABASE_URL` - Postgres connection string (required)
    /// - `REDIS_URL` - Cache URL, `memory://` for in-process (optional)
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let cache = match non_empty("REDIS_URL") {
            None => CacheSettings::Disabled,
            Some(url) if url == MEMORY_CACHE_URL => CacheSettings::Memory,
            Some(url) => CacheSettings::Redis(url),
        };

        Ok(Self {
            database_url,
            database_max_connections: non_empty("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cache,
            server_port: non_empty("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cleanup_interval: non_empty("CACHE_CLEANUP_INTERVAL")
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        })
    }
}
