//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from an optional TOML file; `SAMBAT_API_URL`
//! overrides the reporting API base URL.
//!
//! # Example
//!
//! ```no_run
//! use sambat::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("sambat.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::adapter::outbound::calendar::table;
use crate::application::{ReportEndpoints, FIRST_SELECTABLE_YEAR};
use crate::domain::{DateRangeSelector, RangeKind};
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`ReportConfig::api_url`].
pub const API_URL_ENV: &str = "SAMBAT_API_URL";

/// Default config file name looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "sambat.toml";

/// Calendar settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Earliest BS year offered by the year picker.
    pub first_selectable_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_selectable_year: FIRST_SELECTABLE_YEAR,
        }
    }
}

/// Reporting API settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Base URL of the reporting API.
    pub api_url: String,

    /// Range a report view opens with. Must not need parameters.
    pub default_range: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".into(),
            default_range: RangeKind::Today.label().into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Calendar configuration.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Reporting API configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `SAMBAT_API_URL` override before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(url) = std::env::var(API_URL_ENV) {
            debug!(env = API_URL_ENV, "overriding report api_url from environment");
            config.report.api_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Self::parse_toml("")
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {:?}", LoggingConfig::FORMATS),
            }
            .into());
        }

        let year = self.calendar.first_selectable_year;
        if !(table::FIRST_YEAR..=table::LAST_YEAR).contains(&year) {
            return Err(ConfigError::InvalidValue {
                field: "first_selectable_year",
                reason: format!(
                    "must be between {} and {}",
                    table::FIRST_YEAR,
                    table::LAST_YEAR
                ),
            }
            .into());
        }

        if self.report.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if let Err(e) = ReportEndpoints::parse(&self.report.api_url) {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                reason: e.to_string(),
            }
            .into());
        }

        if let Err(e) = self.default_selector() {
            return Err(ConfigError::InvalidValue {
                field: "default_range",
                reason: e.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// The selector a report view opens with.
    pub fn default_selector(&self) -> Result<DateRangeSelector> {
        let kind: RangeKind = self.report.default_range.parse()?;
        DateRangeSelector::try_from(kind)
    }

    /// Endpoint builder for the configured API.
    pub fn endpoints(&self) -> Result<ReportEndpoints> {
        ReportEndpoints::parse(&self.report.api_url)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
