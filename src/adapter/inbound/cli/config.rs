//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: courtedge -c {} config validate",
        path.display()
    ));
    output::note("3. Run: courtedge analyze --home-odds 1.53 --away-odds 4.50");
    Ok(())
}

/// Execute `config show` on an already loaded configuration.
pub fn execute_show(config: &Config, path: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "loaded": path.exists(),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if path.exists() {
        output::field("File", path.display());
    } else {
        output::field("File", output::muted("(none, built-in defaults)"));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Staking");
    output::field("Kelly", config.staking.kelly_fraction);
    match config.staking.bankroll {
        Some(bankroll) => output::field("Bankroll", format!("{bankroll:.2}")),
        None => output::field("Bankroll", output::muted("(not set)")),
    }

    output::section("Rating Model");
    output::field("Home edge", config.model.home_advantage);
    output::field("Weight", config.model.rating_weight);

    output::section("Teams");
    match &config.teams.feed {
        Some(feed) => output::field("Feed", feed.display()),
        None => output::field("Feed", output::muted("(built-in list)")),
    }

    output::section("Reports");
    output::field("Directory", config.reports.directory.display());

    output::section("TOML");
    output::lines(&config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success(&format!("{} is valid", path.display()));
    if let Some(feed) = config.teams.feed.as_ref().filter(|feed| !feed.exists()) {
        output::warning(&format!(
            "team feed {} does not exist; the built-in list will be used",
            feed.display()
        ));
    }
    Ok(())
}
