//! Canonical test configurations.

use crate::infrastructure::config::settings::Config;

/// Defaults with the API pointed at a fixed test host.
pub fn with_api(url: &str) -> Config {
    let mut config = Config::default();
    config.report.api_url = url.to_string();
    config
}

/// Minimal TOML document exercising every section.
pub const FULL_TOML: &str = r#"
[logging]
level = "info"
format = "json"

[calendar]
first_selectable_year = 2080

[report]
api_url = "https://reports.example.com/api"
default_range = "This Week"
"#;
