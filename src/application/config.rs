/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, ENV_REST_BASE_URL, ENV_REST_TIMEOUT, ENV_TOKEN,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Finnhub API client
pub struct Config {
    /// API token, sent as the first query parameter of every request.
    /// Never serialized, so it stays out of `Debug`/`Display` output.
    #[serde(skip_serializing, default)]
    pub token: String,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Finnhub REST API
    pub base_url: String,
    /// Socket timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `FINNHUB_TOKEN`,
    /// `FINNHUB_REST_BASE_URL` and `FINNHUB_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let token = get_env_or_none::<String>(ENV_TOKEN).unwrap_or_else(|| {
            error!("{} not found in environment variables or .env file", ENV_TOKEN);
            String::new()
        });

        Config {
            token,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(ENV_REST_BASE_URL, String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default(ENV_REST_TIMEOUT, DEFAULT_TIMEOUT_SECONDS),
            },
        }
    }

    /// Creates a configuration with the given token and default REST settings,
    /// without reading the environment
    pub fn with_token(token: impl Into<String>) -> Self {
        Config {
            token: token.into(),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Returns a copy of this configuration pointing at another base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Returns a copy of this configuration with another socket timeout
    ///
    /// Must be non-zero; `Client::new` rejects a zero timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.rest_api.timeout = timeout_seconds;
        self
    }

    /// True when a non-blank token is configured
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
