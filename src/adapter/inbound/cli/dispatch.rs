//! Command dispatch.

use std::path::Path;

use crate::adapter::inbound::cli::command::{Commands, ConfigCommand};
use crate::adapter::inbound::cli::{analyze, config, dashboard, teams};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run a parsed command against the loaded configuration.
///
/// `config_path` is the file `config show` and `config validate` report on,
/// and where `config init` writes.
pub fn execute(command: &Commands, config: &Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::execute(args, config),
        Commands::Dashboard(args) => dashboard::handler::execute(args, config),
        Commands::Teams => teams::execute(config),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(config_path, args.force),
        Commands::Config(ConfigCommand::Show) => config::execute_show(config, config_path),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(config_path),
    }
}
