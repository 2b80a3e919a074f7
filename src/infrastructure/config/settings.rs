//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; every table is
//! optional and falls back to built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use courtedge::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0, false);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::logging::LoggingConfig;
use super::model::ModelConfig;
use super::reports::ReportsConfig;
use super::staking::StakingConfig;
use super::teams::TeamsConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stake sizing defaults.
    #[serde(default)]
    pub staking: StakingConfig,

    /// Rating model parameters.
    #[serde(default)]
    pub model: ModelConfig,

    /// Team feed location.
    #[serde(default)]
    pub teams: TeamsConfig,

    /// Report output location.
    #[serde(default)]
    pub reports: ReportsConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or fails
    /// validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when it exists, otherwise use defaults.
    ///
    /// Used for the implicit default location; an explicitly requested file
    /// should go through [`Config::load`] so a typo is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::Serialize)?)
    }

    /// Initialize the tracing subscriber from the logging settings.
    pub fn init_logging(&self, verbosity: u8, quiet: bool) {
        self.logging.init(verbosity, quiet);
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges.
    fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }

        let kelly = self.staking.kelly_fraction;
        if !kelly.is_finite() || kelly <= 0.0 || kelly > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "kelly_fraction",
                reason: "must be greater than 0 and at most 1".to_string(),
            }
            .into());
        }
        if let Some(bankroll) = self.staking.bankroll {
            if !bankroll.is_finite() || bankroll < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "bankroll",
                    reason: "must be 0 or greater".to_string(),
                }
                .into());
            }
        }

        let advantage = self.model.home_advantage;
        if !advantage.is_finite() || !(0.0..0.5).contains(&advantage) {
            return Err(ConfigError::InvalidValue {
                field: "home_advantage",
                reason: "must be at least 0 and below 0.5".to_string(),
            }
            .into());
        }
        if !self.model.rating_weight.is_finite() || self.model.rating_weight < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "rating_weight",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }

        let threshold = self.model.edge_threshold;
        if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
            return Err(ConfigError::InvalidValue {
                field: "edge_threshold",
                reason: "must be at least 0 and below 1".to_string(),
            }
            .into());
        }

        if self.reports.directory.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "directory" }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn invalid_field(result: Result<Config>) -> &'static str {
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => field,
            Err(e) => panic!("expected invalid value, got {e}"),
            Ok(_) => panic!("expected invalid value, got Ok"),
        }
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.staking.kelly_fraction, 1.0);
        assert!(config.staking.bankroll.is_none());
        assert!(config.teams.feed.is_none());
        assert_eq!(config.reports.directory, Path::new("reports"));
    }

    #[test]
    fn parses_all_tables() {
        let config = Config::parse_toml(
            r#"
[logging]
level = "debug"
format = "json"

[staking]
kelly_fraction = 0.25
bankroll = 500.0

[model]
home_advantage = 0.03
rating_weight = 0.02
edge_threshold = 0.1

[teams]
feed = "data/teams.json"

[reports]
directory = "out"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert_eq!(config.staking.kelly_fraction, 0.25);
        assert_eq!(config.staking.bankroll, Some(500.0));
        assert_eq!(config.model.rating_weight, 0.02);
        assert_eq!(config.model.edge_threshold, 0.1);
        assert_eq!(config.teams.feed.as_deref(), Some(Path::new("data/teams.json")));
        assert_eq!(config.reports.csv_path(), Path::new("out/last_analysis.csv"));
    }

    #[test]
    fn rejects_kelly_fraction_out_of_range() {
        let field = invalid_field(Config::parse_toml("[staking]\nkelly_fraction = 1.5\n"));
        assert_eq!(field, "kelly_fraction");

        let field = invalid_field(Config::parse_toml("[staking]\nkelly_fraction = 0.0\n"));
        assert_eq!(field, "kelly_fraction");
    }

    #[test]
    fn rejects_negative_bankroll() {
        let field = invalid_field(Config::parse_toml("[staking]\nbankroll = -10.0\n"));
        assert_eq!(field, "bankroll");
    }

    #[test]
    fn rejects_unknown_log_format() {
        let field = invalid_field(Config::parse_toml("[logging]\nformat = \"xml\"\n"));
        assert_eq!(field, "format");
    }

    #[test]
    fn rejects_implausible_home_advantage() {
        let field = invalid_field(Config::parse_toml("[model]\nhome_advantage = 0.6\n"));
        assert_eq!(field, "home_advantage");
    }

    #[test]
    fn rejects_edge_threshold_out_of_range() {
        let field = invalid_field(Config::parse_toml("[model]\nedge_threshold = 1.0\n"));
        assert_eq!(field, "edge_threshold");

        let field = invalid_field(Config::parse_toml("[model]\nedge_threshold = -0.05\n"));
        assert_eq!(field, "edge_threshold");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[staking\nkelly_fraction = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("config.toml")).unwrap();
        assert_eq!(config.staking.kelly_fraction, 1.0);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("config.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }

    #[test]
    fn effective_config_round_trips_through_toml() {
        let config = Config::parse_toml("[staking]\nbankroll = 250.0\n").unwrap();
        let rendered = config.to_toml().unwrap();
        let reparsed = Config::parse_toml(&rendered).unwrap();

        assert_eq!(reparsed.staking.bankroll, Some(250.0));
    }
}
