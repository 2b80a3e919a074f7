//! Handler for the `analyze` command.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::adapter::inbound::cli::command::AnalyzeArgs;
use crate::adapter::inbound::cli::{output, render};
use crate::application::modeling::{select_model, ModelChoice};
use crate::domain::analysis::{analyze, Analysis, AnalysisRequest, ModelInput, StakeInput};
use crate::domain::team::Matchup;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::report::{ExportFormat, Report};

/// Resolve the model for this invocation.
///
/// The team directory is only consulted when the rating model is wanted.
fn model_input(args: &AnalyzeArgs, matchup: &Matchup, config: &Config) -> Result<ModelInput> {
    match (args.model_home_prob, args.no_model) {
        (Some(home), _) => Ok(ModelInput::Supplied(home)),
        (None, true) => Ok(ModelInput::Absent),
        (None, false) => {
            let directory = bootstrap::team_directory(config)?;
            if directory.fell_back() {
                output::warning("team feed unavailable, using the built-in team list");
            }
            select_model(
                ModelChoice::Ratings,
                matchup,
                &directory,
                &config.model.rating_model(),
            )
        }
    }
}

/// Build the calculator request from flags and config defaults.
pub fn build_request(args: &AnalyzeArgs, config: &Config) -> Result<AnalysisRequest> {
    let matchup = Matchup::new(args.home.trim(), args.away.trim());
    let model = model_input(args, &matchup, config)?;
    let mut request = AnalysisRequest::new(matchup, args.home_odds, args.away_odds)
        .with_model(model)
        .with_edge_threshold(config.model.edge_threshold);

    if let Some(side) = args.bet_side.side() {
        match args.bankroll.or(config.staking.bankroll) {
            Some(bankroll) => {
                request = request.with_stake(StakeInput {
                    side,
                    bankroll,
                    kelly_fraction: args.kelly_fraction.unwrap_or(config.staking.kelly_fraction),
                });
            }
            None => output::warning(&format!(
                "--bet-side {side} given without a bankroll; pass --bankroll to size a stake"
            )),
        }
    }

    Ok(request)
}

fn print_summary(analysis: &Analysis) {
    output::header(env!("CARGO_PKG_VERSION"));
    render::print_analysis(analysis);
}

/// Execute `analyze`.
pub fn execute(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let request = build_request(args, config)?;
    let analysis = analyze(&request)?;
    info!(matchup = %analysis.matchup, edge = analysis.edge.is_available(), "analysis complete");

    let report = Report::new(analysis);
    let exports: Vec<(ExportFormat, &Path)> = [
        (ExportFormat::Json, args.output_json.as_deref()),
        (ExportFormat::Csv, args.output_csv.as_deref()),
    ]
    .into_iter()
    .filter_map(|(format, path)| path.map(|path| (format, path)))
    .collect();
    bootstrap::export_reports(&report, &exports)?;
    for (format, path) in &exports {
        info!(format = %format, path = %path.display(), "exported report");
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "analyze",
            "report": serde_json::to_value(&report)?,
            "exports": exports
                .iter()
                .map(|(format, path)| json!({
                    "format": format.to_string().to_lowercase(),
                    "path": path.display().to_string(),
                }))
                .collect::<Vec<_>>(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        if let Some(stake) = &report.analysis.stake {
            println!("{}", stake.stake_amount);
        }
        return Ok(());
    }

    print_summary(&report.analysis);
    if !exports.is_empty() {
        output::section("Exports");
        for (format, path) in &exports {
            output::success(&format!("{format} written to {}", path.display()));
        }
    }

    Ok(())
}
