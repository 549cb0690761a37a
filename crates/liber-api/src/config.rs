//! # API Configuration
//!
//! Backend endpoint configuration for the client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     LIBER_API_BASE=https://api.liber.example                           │
//! │     LIBER_API_CONNECT_TIMEOUT_SECS=5                                   │
//! │     LIBER_API_REQUEST_TIMEOUT_SECS=30                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/liber/client.toml (Linux)                                │
//! │     ~/Library/Application Support/com.liber.client/client.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:4000, 10 s connect, 30 s request                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # client.toml
//! base_url = "https://api.liber.example"
//! connect_timeout_secs = 5
//! request_timeout_secs = 30
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};

// =============================================================================
// API Configuration
// =============================================================================

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API. Endpoint paths are joined onto this.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (client.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ApiResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading API config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns the default if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load API config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ApiResult<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidBaseUrl(format!(
                "base URL must use http or https, got: {}",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(ApiError::ConfigLoad(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// The parsed base URL.
    pub fn parsed_base_url(&self) -> ApiResult<Url> {
        self.validate()?;
        Ok(Url::parse(&self.base_url)?)
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("LIBER_API_BASE") {
            debug!(base = %base, "Overriding API base URL from environment");
            self.base_url = base;
        }

        if let Ok(secs) = std::env::var("LIBER_API_CONNECT_TIMEOUT_SECS") {
            if let Ok(parsed) = secs.parse::<u64>() {
                self.connect_timeout_secs = parsed;
            }
        }

        if let Ok(secs) = std::env::var("LIBER_API_REQUEST_TIMEOUT_SECS") {
            if let Ok(parsed) = secs.parse::<u64>() {
                self.request_timeout_secs = parsed;
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "liber", "client")
            .map(|dirs| dirs.config_dir().join("client.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing_with_partial_file() {
        let config: ApiConfig = toml::from_str(r#"base_url = "https://api.liber.example""#).unwrap();
        assert_eq!(config.base_url, "https://api.liber.example");
        // Unspecified fields keep their defaults.
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        let mut config = ApiConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://files.example".to_string();
        assert!(matches!(
            config.validate(),
            Err(ApiError::InvalidBaseUrl(_))
        ));

        config.base_url = "https://api.liber.example".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_request_timeout() {
        let config = ApiConfig {
            request_timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides_win_over_file_values() {
        // The only test that touches LIBER_API_* variables.
        std::env::set_var("LIBER_API_BASE", "https://staging.liber.example");
        std::env::set_var("LIBER_API_REQUEST_TIMEOUT_SECS", "7");

        let mut config = ApiConfig {
            base_url: "http://from-file.example".to_string(),
            ..ApiConfig::default()
        };
        config.apply_env_overrides();

        assert_eq!(config.base_url, "https://staging.liber.example");
        assert_eq!(config.request_timeout_secs, 7);

        std::env::remove_var("LIBER_API_BASE");
        std::env::remove_var("LIBER_API_REQUEST_TIMEOUT_SECS");
    }
}
