//! Countries Configuration
//!
//! Parses and validates the configuration that drives country fields:
//! which codes are filtered out of the option set and how a default value
//! is chosen. Loadable from a TOML file or built in code; read-only for
//! the lifetime of any field constructed with it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fieldkit_i18n::CountryCode;

/// Configuration for country selector fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// Derive the default value from the active locale (default: false)
    #[serde(default)]
    pub default_to_locale: bool,

    /// Fallback default country when no candidate or locale default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_country: Option<CountryCode>,

    /// Country codes removed from the option set
    #[serde(default)]
    pub invalid_countries: Vec<CountryCode>,
}

/// Errors that can occur when loading or validating the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate invalid country: '{0}'")]
    DuplicateInvalidCountry(CountryCode),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

impl CountriesConfig {
    /// Load configuration from a specific path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CountriesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        // Check for duplicate invalid countries
        let mut seen = HashSet::new();
        for code in &self.invalid_countries {
            if !seen.insert(code) {
                return Err(ConfigError::DuplicateInvalidCountry(code.clone()));
            }
        }

        // A default that is also filtered is legal; the resolution chain
        // skips it silently, so surface the contradiction here
        if let Some(default) = &self.default_country {
            if self.invalid_countries.contains(default) {
                tracing::warn!(
                    country = %default,
                    "default_country is listed in invalid_countries and will never be adopted"
                );
            }
        }

        Ok(())
    }

    /// Check whether a code is filtered out by this configuration
    pub fn is_invalid(&self, code: &CountryCode) -> bool {
        self.invalid_countries.contains(code)
    }
}
