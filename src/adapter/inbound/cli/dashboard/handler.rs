//! Handler for the `dashboard` command.

use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::info;

use crate::adapter::inbound::cli::command::DashboardArgs;
use crate::adapter::inbound::cli::{output, paths, render};
use crate::domain::analysis::{analyze, Analysis};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::report::{ExportFormat, Report};

use super::prompt::prompt_session;
use super::session::{ModelMode, Session};

/// Run the dashboard.
pub fn execute(args: &DashboardArgs, config: &Config) -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`courtedge dashboard` is interactive; use `courtedge analyze --json` for scripted output"
                .to_string(),
        }
        .into());
    }

    let session_path = args.session.clone().unwrap_or_else(paths::default_session);

    output::header(env!("CARGO_PKG_VERSION"));

    let pb = output::spinner("Loading teams...");
    let directory = match bootstrap::team_directory(config) {
        Ok(directory) => directory,
        Err(e) => {
            output::spinner_fail(&pb, "Could not load teams");
            return Err(e);
        }
    };
    output::spinner_success(
        &pb,
        &format!(
            "Loaded {} teams from {}",
            directory.teams().len(),
            directory.source()
        ),
    );
    if directory.fell_back() {
        output::warning("team feed unavailable, using the built-in team list");
    }

    let theme = ColorfulTheme::default();
    let mut session = Session::load(&session_path).unwrap_or_else(|| Session {
        bankroll: config.staking.bankroll.unwrap_or(Session::default().bankroll),
        ..Session::default()
    });

    loop {
        session = prompt_session(&theme, &directory, &session)?;

        let analysis = session
            .request(&directory, &config.model)
            .and_then(|request| analyze(&request).map_err(Into::into));
        match analysis {
            Ok(analysis) => {
                info!(matchup = %analysis.matchup, "dashboard analysis complete");
                render::print_analysis(&analysis);
                if session.model == ModelMode::Ratings && analysis.model.is_none() {
                    output::hint("no net ratings for this matchup; set [teams] feed in the config");
                }

                offer_export(&theme, config, analysis)?;

                if !args.no_save {
                    session.save(&session_path)?;
                    output::note(&format!("Inputs saved to {}", session_path.display()));
                }
            }
            Err(e) => {
                output::error(&e.to_string());
                output::hint("adjust the inputs and try again");
            }
        }

        println!();
        let again = Confirm::with_theme(&theme)
            .with_prompt("Analyze another matchup?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

fn offer_export(theme: &ColorfulTheme, config: &Config, analysis: Analysis) -> Result<()> {
    println!();
    let export = Confirm::with_theme(theme)
        .with_prompt(format!(
            "Export JSON and CSV to {}?",
            config.reports.directory.display()
        ))
        .default(false)
        .interact()?;
    if !export {
        return Ok(());
    }

    let report = Report::new(analysis);
    let json_path = config.reports.json_path();
    let csv_path = config.reports.csv_path();
    let exports = [
        (ExportFormat::Json, json_path.as_path()),
        (ExportFormat::Csv, csv_path.as_path()),
    ];
    bootstrap::export_reports(&report, &exports)?;
    for (format, path) in exports {
        output::success(&format!("{format} written to {}", path.display()));
    }
    Ok(())
}
