use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials for the Pocket API
pub struct Credentials {
    /// Consumer key identifying the application
    pub consumer_key: String,
    /// Access token of a user that already approved the application
    pub access_token: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Pocket API
    pub base_url: String,
    /// Timeout in seconds for every request, 0 for none
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Pocket API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Reads a `.env` file when present, then:
    /// - `POCKET_CONSUMER_KEY`
    /// - `POCKET_ACCESS_TOKEN` (optional)
    /// - `POCKET_BASE_URL` (default `https://getpocket.com/`)
    /// - `POCKET_TIMEOUT` in seconds (default 5, 0 disables the deadline)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let consumer_key = get_env_or_default("POCKET_CONSUMER_KEY", String::from("default_consumer_key"));
        if consumer_key == "default_consumer_key" {
            error!("POCKET_CONSUMER_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                consumer_key,
                access_token: get_env_or_none("POCKET_ACCESS_TOKEN"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("POCKET_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("POCKET_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration for `consumer_key` with default settings
    ///
    /// The environment is not read.
    pub fn with_consumer_key(consumer_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                consumer_key: consumer_key.into(),
                access_token: None,
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Request timeout as a [`Duration`], `None` when set to 0
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.rest_api.timeout > 0).then(|| Duration::from_secs(self.rest_api.timeout))
    }
}
