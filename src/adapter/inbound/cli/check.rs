//! Configuration check handler.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, API_URL_ENV};

/// Validate the configuration file and print the effective settings.
pub fn config(path: &Path) -> Result<()> {
    let exists = path.exists();
    let config = Config::load_or_default(path)?;
    let env_override = std::env::var_os(API_URL_ENV).is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "check.config",
            "path": path.display().to_string(),
            "file_found": exists,
            "valid": true,
            "api_url": config.report.api_url,
            "api_url_from_env": env_override,
            "default_range": config.report.default_range,
            "first_selectable_year": config.calendar.first_selectable_year,
            "log_level": config.logging.level,
            "log_format": config.logging.format,
        }));
        return Ok(());
    }

    output::section("Configuration Check");
    output::field("Config", path.display());
    if exists {
        output::success("Configuration file is valid");
    } else {
        output::warning("Configuration file not found, using defaults");
    }

    output::section("Summary");
    output::field("API URL", &config.report.api_url);
    if env_override {
        output::field("", format!("(from {API_URL_ENV})"));
    }
    output::field("Default", &config.report.default_range);
    output::field("First year", config.calendar.first_selectable_year);
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );

    output::success("Configuration check complete");
    Ok(())
}
