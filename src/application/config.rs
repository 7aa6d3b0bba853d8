/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{
    AUTHORIZATION_CODE_KEY, BASE_URL_KEY, CLIENT_ID_KEY, CLIENT_SECRET_KEY, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS, ENV_PREFIX, REDIRECT_URI_KEY, REQUIRED_CREDENTIAL_KEYS, TIMEOUT_KEY,
};
use crate::error::AppError;
use crate::utils::config::collect_prefixed_env;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Deserialize, Clone, PartialEq, Eq)]
/// OAuth2 credentials used to obtain an access token from TimeSolv
pub struct Credentials {
    /// OAuth2 client identifier
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Authorization code received on the redirect URI
    pub authorization_code: String,
    /// Redirect URI registered with the TimeSolv application
    pub redirect_uri: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("authorization_code", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RestApiConfig {
    /// Resolves an endpoint path against the base URL
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the TimeSolv API client
pub struct Config {
    /// OAuth2 credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration for the default TimeSolv base URL
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Overrides the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Builds a configuration from a key/value mapping with case-insensitive keys
    ///
    /// Keys are trimmed and lower-cased before lookup, so `Client_ID`,
    /// `CLIENT_ID` and `client_id` are equivalent; when two spellings of the
    /// same key are given, the last one wins. `client_id`, `client_secret`,
    /// `authorization_code` and `redirect_uri` are required and must not be
    /// blank. `base_url` and `timeout` (seconds) are optional.
    ///
    /// # Errors
    /// Returns `AppError::Configuration` naming every missing credential, or
    /// when `timeout` is not a positive integer.
    pub fn from_map<I, K, V>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let map = normalize_keys(entries);

        let missing: Vec<&str> = REQUIRED_CREDENTIAL_KEYS
            .iter()
            .copied()
            .filter(|key| non_blank(&map, key).is_none())
            .collect();
        if !missing.is_empty() {
            error!("Missing required credentials: {}", missing.join(", "));
            return Err(AppError::Configuration(format!(
                "missing required credentials: {}",
                missing.join(", ")
            )));
        }

        let required = |key: &str| non_blank(&map, key).unwrap_or_default().to_string();
        let credentials = Credentials {
            client_id: required(CLIENT_ID_KEY),
            client_secret: required(CLIENT_SECRET_KEY),
            authorization_code: required(AUTHORIZATION_CODE_KEY),
            redirect_uri: required(REDIRECT_URI_KEY),
        };

        let mut config = Config::new(credentials);
        if let Some(base_url) = non_blank(&map, BASE_URL_KEY) {
            config.rest_api.base_url = base_url.to_string();
        }
        if let Some(timeout) = non_blank(&map, TIMEOUT_KEY) {
            config.rest_api.timeout = parse_timeout(timeout)?;
        }

        debug!("Configuration loaded for base URL {}", config.rest_api.base_url);
        Ok(config)
    }

    /// Builds a configuration from `TIMESOLV_*` environment variables
    ///
    /// A `.env` file is loaded first when present. Reads
    /// `TIMESOLV_CLIENT_ID`, `TIMESOLV_CLIENT_SECRET`,
    /// `TIMESOLV_AUTHORIZATION_CODE`, `TIMESOLV_REDIRECT_URI` and optionally
    /// `TIMESOLV_BASE_URL` and `TIMESOLV_TIMEOUT`.
    ///
    /// # Errors
    /// Same as [`Config::from_map`].
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let mut keys: Vec<&str> = REQUIRED_CREDENTIAL_KEYS.to_vec();
        keys.extend([BASE_URL_KEY, TIMEOUT_KEY]);
        Self::from_map(collect_prefixed_env(ENV_PREFIX, &keys))
    }
}

/// Produces the canonical-key mapping: keys trimmed and lower-cased
pub fn normalize_keys<I, K, V>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.as_ref().trim().to_lowercase(), value.into()))
        .collect()
}

fn non_blank<'a>(map: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    map.get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn parse_timeout(value: &str) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Configuration(format!(
            "timeout must be a positive number of seconds, got '{value}'"
        ))),
    }
}
