use chrono::Locale;
use reqwest::Url;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

const BASE_URL_VAR: &str = "GAMEREV_API_BASE_URL";
const TIMEOUT_VAR: &str = "GAMEREV_TIMEOUT_SECS";
const LOCALE_VAR: &str = "GAMEREV_LOCALE";
const LOG_VAR: &str = "GAMEREV_LOG";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration errors. Each one names the setting that was ignored.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("GAMEREV_API_BASE_URL: invalid base URL {0:?}")]
    InvalidUrl(String),
    #[error("GAMEREV_TIMEOUT_SECS: expected a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("GAMEREV_LOCALE: unknown locale {0:?}")]
    UnknownLocale(String),
    #[error("GAMEREV_LOG: invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Where and how the backend is reached
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Origin (and optional path prefix) the `/games` endpoints hang off
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Application configuration
///
/// Build-time environment variables set the defaults baked into the bundle.
/// On native targets the same variables (and a `.env` file) are read again at
/// startup and take precedence.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// Locale used for release dates
    pub locale: Locale,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            locale: Locale::en_US,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Invalid settings fall back to their defaults; the returned errors say
    /// which ones. Logging isn't set up yet at this point, so the caller
    /// reports them.
    pub fn load() -> (Self, Vec<ConfigError>) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dotenvy::dotenv();
        }
        Self::from_lookup(lookup_env)
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(BASE_URL_VAR) {
            match parse_base_url(&raw) {
                Ok(url) => config.api.base_url = url,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            match parse_timeout(&raw) {
                Ok(timeout) => config.api.timeout = timeout,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = lookup(LOCALE_VAR) {
            match parse_locale(&raw) {
                Ok(locale) => config.locale = locale,
                Err(e) => errors.push(e),
            }
        }
        if let Some(raw) = lookup(LOG_VAR) {
            match Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::InvalidLogLevel(raw)),
            }
        }

        (config, errors)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

fn parse_locale(raw: &str) -> Result<Locale, ConfigError> {
    Locale::try_from(raw.trim()).map_err(|_| ConfigError::UnknownLocale(raw.to_string()))
}

fn build_time_value(key: &str) -> Option<&'static str> {
    match key {
        BASE_URL_VAR => option_env!("GAMEREV_API_BASE_URL"),
        TIMEOUT_VAR => option_env!("GAMEREV_TIMEOUT_SECS"),
        LOCALE_VAR => option_env!("GAMEREV_LOCALE"),
        LOG_VAR => option_env!("GAMEREV_LOG"),
        _ => None,
    }
}

fn lookup_env(key: &str) -> Option<String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(value) = std::env::var(key) {
            return Some(value);
        }
    }
    build_time_value(key).map(str::to_string)
}
