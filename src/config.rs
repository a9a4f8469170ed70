//! Configuration Module
//!
//! Handles loading the REPL configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_INTERVAL_SECS;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// REPL configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache eviction interval in seconds, also the reaper period
    pub cache_interval: u64,
    /// Root URL of the PokeAPI, without a trailing slash
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL` - Eviction interval in seconds (default: 300)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    ///
    /// Zero or unparseable durations fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            cache_interval: positive_secs("CACHE_INTERVAL").unwrap_or(DEFAULT_INTERVAL_SECS),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: positive_secs("REQUEST_TIMEOUT")
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Eviction interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

fn positive_secs(var: &str) -> Option<u64> {
    env::var(var)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|secs| *secs > 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: DEFAULT_INTERVAL_SECS,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
