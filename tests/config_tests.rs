use std::fs;
use std::path::{Path, PathBuf};

use courtedge::error::{ConfigError, Error};
use courtedge::infrastructure::config::settings::Config;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn shipped_example_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml.example");
    let config = Config::load(&path).expect("example config should be valid");

    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.staking.kelly_fraction, 1.0);
    assert!(config.staking.bankroll.is_none());
    assert!(config.teams.feed.is_none());
}

#[test]
fn config_rejects_fractional_kelly_above_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[logging]
level = "info"
format = "pretty"

[staking]
kelly_fraction = 2.0
bankroll = 1000.0
"#,
    );

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "kelly_fraction",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid kelly_fraction error, got {err}"),
        Ok(config) => panic!(
            "Expected kelly_fraction to be rejected, got {}",
            config.staking.kelly_fraction
        ),
    }
}

#[test]
fn config_rejects_negative_rating_weight() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[model]\nrating_weight = -0.01\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "rating_weight",
            ..
        }))
    ));
}

#[test]
fn config_requires_report_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[reports]\ndirectory = \"\"\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::MissingField { field: "directory" }))
    ));
}

#[test]
fn missing_explicit_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        Config::load(dir.path().join("absent.toml")),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn existing_default_file_is_still_validated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(&dir, "[logging]\nformat = \"xml\"\n");

    assert!(matches!(
        Config::load_or_default(&path),
        Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
    ));
}

#[test]
fn effective_config_reloads_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[staking]
kelly_fraction = 0.25
bankroll = 750.0

[teams]
feed = "feeds/teams.json"

[reports]
directory = "out"
"#,
    );

    let config = Config::load(&path).unwrap();
    let rendered = config.to_toml().unwrap();
    let reloaded = Config::parse_toml(&rendered).unwrap();

    assert_eq!(reloaded.staking.kelly_fraction, 0.25);
    assert_eq!(reloaded.staking.bankroll, Some(750.0));
    assert_eq!(
        reloaded.teams.feed.as_deref(),
        Some(Path::new("feeds/teams.json"))
    );
    assert_eq!(
        reloaded.reports.json_path(),
        Path::new("out/last_analysis.json")
    );
}
