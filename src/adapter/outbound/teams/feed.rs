//! Team feed file source.
//!
//! The feed is a JSON array of teams:
//!
//! ```json
//! [
//!   { "name": "Boston Celtics", "abbreviation": "BOS", "net_rating": 9.4 },
//!   { "name": "Miami Heat", "abbreviation": "MIA" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::team::Team;
use crate::error::{Error, Result};
use crate::port::outbound::teams::TeamSource;

/// Reads teams from a feed file on every [`TeamSource::load`] call.
#[derive(Debug, Clone)]
pub struct FeedTeamSource {
    path: PathBuf,
}

impl FeedTeamSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> Error {
        Error::TeamSource {
            source_name: self.name().to_string(),
            reason: reason.into(),
        }
    }
}

impl TeamSource for FeedTeamSource {
    fn name(&self) -> &str {
        "feed"
    }

    fn load(&self) -> Result<Vec<Team>> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.unavailable(format!("{}: {e}", self.path.display())))?;

        let teams: Vec<Team> = serde_json::from_str(&content)
            .map_err(|e| self.unavailable(format!("{}: {e}", self.path.display())))?;

        if teams.is_empty() {
            return Err(self.unavailable(format!("{} lists no teams", self.path.display())));
        }

        debug!(path = %self.path.display(), count = teams.len(), "loaded team feed");
        Ok(teams)
    }
}
