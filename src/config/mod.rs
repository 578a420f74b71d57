//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TABLE: &str = "bookings";

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Connection settings for the hosted booking backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,

    /// Public (anon) API key sent with every request
    pub api_key: String,

    /// Table receiving new bookings
    #[serde(default = "default_table")]
    pub table: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    pub backend: BackendConfig,
}

impl BookingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from `BOOKING_BACKEND_URL`, `BOOKING_BACKEND_KEY`
    /// and optionally `BOOKING_BACKEND_TABLE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::Missing {
                    key: key.to_string(),
                })
        };

        let config = Self {
            backend: BackendConfig {
                url: required("BOOKING_BACKEND_URL")?,
                api_key: required("BOOKING_BACKEND_KEY")?,
                table: lookup("BOOKING_BACKEND_TABLE")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(default_table),
            },
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("backend.url", &self.backend.url),
            ("backend.api_key", &self.backend.api_key),
            ("backend.table", &self.backend.table),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}
