use clap::Parser;
use tracing::debug;

use courtedge::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use courtedge::adapter::inbound::cli::output::{self, OutputConfig};
use courtedge::adapter::inbound::cli::{config, diagnostic, dispatch, paths};
use courtedge::error::Result;
use courtedge::infrastructure::config::settings::Config;

fn run(cli: &Cli) -> Result<()> {
    let explicit = cli.config.is_some();
    let config_path = cli.config.clone().unwrap_or_else(paths::default_config);

    // `config init` creates the file the other commands load.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        Config::default().init_logging(cli.verbose, cli.quiet);
        return config::execute_init(&config_path, args.force);
    }

    let loaded = if explicit || matches!(cli.command, Commands::Config(ConfigCommand::Validate)) {
        Config::load(&config_path)
    } else {
        Config::load_or_default(&config_path)
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            Config::default().init_logging(cli.verbose, cli.quiet);
            return Err(e);
        }
    };
    config.init_logging(cli.verbose, cli.quiet);
    debug!(path = %config_path.display(), "configuration loaded");

    dispatch::execute(&cli.command, &config, &config_path)
}

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));
    output::set_color(cli.color);

    if let Err(e) = run(&cli) {
        if output::is_json() {
            output::error(&e.to_string());
        } else {
            let config_path = cli.config.clone().unwrap_or_else(paths::default_config);
            eprintln!("{:?}", diagnostic::diagnose(e, &config_path));
        }
        std::process::exit(1);
    }
}
