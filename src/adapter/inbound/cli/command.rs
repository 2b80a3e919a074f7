//! Command-line interface definitions.
//!
//! Defines the CLI structure for the courtedge application using `clap`.
//! The CLI supports a one-shot analysis, an interactive dashboard, team
//! listing, and configuration management.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::odds::Side;

/// Matchup odds analysis: fair probabilities, model edge, Kelly stakes
#[derive(Parser, Debug)]
#[command(name = "courtedge")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.courtedge/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the courtedge CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one matchup from its decimal odds
    Analyze(AnalyzeArgs),

    /// Interactive analysis session
    Dashboard(DashboardArgs),

    /// List known teams and where they came from
    Teams,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `courtedge config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Side to size a stake for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BetSide {
    Home,
    Away,
    /// No stake sizing
    #[default]
    None,
}

impl BetSide {
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Home => Some(Side::Home),
            Self::Away => Some(Side::Away),
            Self::None => None,
        }
    }
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Home team name
    #[arg(long, default_value = "New York Knicks")]
    pub home: String,

    /// Away team name
    #[arg(long, default_value = "Miami Heat")]
    pub away: String,

    /// Home decimal odds (must be greater than 1.0)
    #[arg(long, default_value = "1.53", allow_negative_numbers = true)]
    pub home_odds: f64,

    /// Away decimal odds (must be greater than 1.0)
    #[arg(long, default_value = "4.5", allow_negative_numbers = true)]
    pub away_odds: f64,

    /// Independent home win probability, strictly between 0 and 1
    #[arg(long, conflicts_with = "no_model", allow_negative_numbers = true)]
    pub model_home_prob: Option<f64>,

    /// Skip the team rating model and analyze against the market only
    #[arg(long)]
    pub no_model: bool,

    /// Side to size a Kelly stake for
    #[arg(long, value_enum, default_value = "none")]
    pub bet_side: BetSide,

    /// Bankroll for stake sizing [default: from config]
    #[arg(long, allow_negative_numbers = true)]
    pub bankroll: Option<f64>,

    /// Fraction of full Kelly to stake, in (0, 1] [default: from config]
    #[arg(long, allow_negative_numbers = true)]
    pub kelly_fraction: Option<f64>,

    /// Write the analysis as JSON to this path
    #[arg(long)]
    pub output_json: Option<PathBuf>,

    /// Write a one-row CSV summary to this path
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}

/// Arguments for the `dashboard` subcommand.
#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Session file that pre-fills prompts [default: ~/.courtedge/session.toml]
    #[arg(long)]
    pub session: Option<PathBuf>,

    /// Do not save inputs for the next session
    #[arg(long)]
    pub no_save: bool,
}
