//! Service configuration from environment variables or a TOML file.
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CORS_ALLOWED_ORIGINS`: Comma-separated origins; unset or empty allows any origin
//! - `MAX_NUMBER_MAGNITUDE`: Largest absolute value accepted for classification
//!   (default: 10000000); the perfect-number check is linear in the input
//! - `NUMBERS_API_URL`: Base URL of the Numbers API (default: http://numbersapi.com)
//! - `NUMBERS_API_TIMEOUT_MS`: Timeout for one fact lookup (default: 5000)
//! - `FUN_FACT_FALLBACK`: Text used when no fact can be fetched; set it to an
//!   empty string to report an error instead
//! - `CONTACT_EMAIL`, `GITHUB_URL`: Values reported by the service info endpoint
//! - `NUMCLASS_CONFIG`: Path to a TOML file; when set, [`ServiceConfig::load`]
//!   reads the file instead of the variables above

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_PATH_VAR: &str = "NUMCLASS_CONFIG";
pub const DEFAULT_FALLBACK_FACT: &str = "No fun fact available for this number.";
pub const DEFAULT_MAX_MAGNITUDE: u64 = 10_000_000;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub facts: FactsSettings,
    #[serde(default)]
    pub info: InfoSettings,
}

/// Listener and CORS settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Inputs with a larger absolute value are rejected before classification.
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: u64,
}

/// Numbers API client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactsSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Substituted when the lookup fails. `None` turns a failed lookup into an error response.
    #[serde(default = "default_fallback_fact")]
    pub fallback_fact: Option<String>,
}

/// Contact details reported by `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoSettings {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub github_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_magnitude() -> u64 {
    DEFAULT_MAX_MAGNITUDE
}

fn default_base_url() -> String {
    "http://numbersapi.com".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_fallback_fact() -> Option<String> {
    Some(DEFAULT_FALLBACK_FACT.to_string())
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            max_magnitude: default_max_magnitude(),
        }
    }
}

impl Default for FactsSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            fallback_fact: default_fallback_fact(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host:port` into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::Invalid {
                key: "HOST".to_string(),
                message: format!("'{}' is not a valid listen address: {}", self.host, e),
            })
    }
}

impl FactsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl ServiceConfig {
    /// Load configuration the way the server binary does: `NUMCLASS_CONFIG`
    /// selects a TOML file; without it the settings come from environment
    /// variables. Call [`load_dotenv`] first to apply a `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Self::from_env(),
        }
    }

    /// Build configuration from environment variables, using defaults for unset ones.
    ///
    /// # Errors
    /// Returns an error if `PORT`, `MAX_NUMBER_MAGNITUDE` or `NUMBERS_API_TIMEOUT_MS`
    /// is not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", raw),
            })?,
            Err(_) => default_port(),
        };
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origin_list(&raw))
            .unwrap_or_default();
        let max_magnitude = match env::var("MAX_NUMBER_MAGNITUDE") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "MAX_NUMBER_MAGNITUDE".to_string(),
                message: format!("'{}' is not a valid non-negative integer", raw),
            })?,
            Err(_) => default_max_magnitude(),
        };

        let base_url = env::var("NUMBERS_API_URL").unwrap_or_else(|_| default_base_url());
        let timeout_ms = match env::var("NUMBERS_API_TIMEOUT_MS") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "NUMBERS_API_TIMEOUT_MS".to_string(),
                message: format!("'{}' is not a valid number of milliseconds", raw),
            })?,
            Err(_) => default_timeout_ms(),
        };
        let fallback_fact = match env::var("FUN_FACT_FALLBACK") {
            Ok(text) => non_empty(text),
            Err(_) => default_fallback_fact(),
        };

        let email = env::var("CONTACT_EMAIL").unwrap_or_default();
        let github_url = env::var("GITHUB_URL").unwrap_or_default();

        Ok(Self {
            server: ServerSettings {
                host,
                port,
                allowed_origins,
                max_magnitude,
            },
            facts: FactsSettings {
                base_url,
                timeout_ms,
                fallback_fact,
            },
            info: InfoSettings { email, github_url },
        })
    }

    /// Load configuration from a TOML file. Missing keys take their defaults and
    /// an empty `fallback_fact` disables the fallback.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: ServiceConfig = toml::from_str(content)?;
        config.facts.fallback_fact = config.facts.fallback_fact.and_then(non_empty);
        Ok(config)
    }
}

/// Apply a `.env` file from the working directory (or a parent) to the process
/// environment without overriding variables that are already set.
///
/// Returns the path of the file that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
