//! Team directory with availability-based source selection.

use tracing::{info, warn};

use crate::domain::team::Team;
use crate::error::{Error, Result};
use crate::port::outbound::teams::TeamSource;

/// Teams loaded from whichever source answered first.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    source: String,
    fell_back: bool,
    teams: Vec<Team>,
}

impl TeamDirectory {
    /// Load teams from `primary`, falling back to `fallback` when the primary
    /// source is absent or unavailable.
    ///
    /// # Errors
    ///
    /// Returns the fallback's error if it is unavailable too.
    pub fn resolve(primary: Option<&dyn TeamSource>, fallback: &dyn TeamSource) -> Result<Self> {
        if let Some(primary) = primary {
            match primary.load() {
                Ok(teams) => {
                    info!(source = primary.name(), count = teams.len(), "loaded teams");
                    return Ok(Self {
                        source: primary.name().to_string(),
                        fell_back: false,
                        teams,
                    });
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        fallback = fallback.name(),
                        "team source unavailable, using fallback"
                    );
                }
            }
        }

        let teams = fallback.load()?;
        info!(source = fallback.name(), count = teams.len(), "loaded teams");
        Ok(Self {
            source: fallback.name().to_string(),
            fell_back: primary.is_some(),
            teams,
        })
    }

    /// Name of the source that supplied the teams.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when a configured primary source failed and the fallback answered.
    #[must_use]
    pub const fn fell_back(&self) -> bool {
        self.fell_back
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Case-insensitive lookup by full name or abbreviation.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.matches(query))
    }

    /// Like [`Self::find`], but unknown names are an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTeam`] when no team matches.
    pub fn require(&self, query: &str) -> Result<&Team> {
        self.find(query)
            .ok_or_else(|| Error::UnknownTeam(query.trim().to_string()))
    }

    /// Position of a team in [`Self::teams`], for pre-selecting prompts.
    #[must_use]
    pub fn position(&self, query: &str) -> Option<usize> {
        self.teams.iter().position(|team| team.matches(query))
    }
}
