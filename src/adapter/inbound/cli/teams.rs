//! Handler for the `teams` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::team::Team;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Team")]
    name: String,
    #[tabled(rename = "Code")]
    abbreviation: String,
    #[tabled(rename = "Net Rating")]
    net_rating: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
            net_rating: team
                .net_rating
                .map(|r| format!("{r:+.1}"))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// List teams from the directory.
pub fn execute(config: &Config) -> Result<()> {
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

    if output::is_json() {
        output::json_output(json!({
            "command": "teams",
            "source": directory.source(),
            "fell_back": directory.fell_back(),
            "teams": directory.teams(),
        }));
        return Ok(());
    }

    if directory.fell_back() {
        output::warning("team feed unavailable, using the built-in team list");
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Teams");
    output::field("Source", directory.source());

    let rows: Vec<TeamRow> = directory.teams().iter().map(TeamRow::from).collect();
    output::lines(&Table::new(rows).to_string());

    if config.teams.feed.is_none() {
        output::hint("set [teams] feed in the config to load net ratings");
    }

    Ok(())
}
