//! Dashboard inputs persisted between sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::directory::TeamDirectory;
use crate::application::modeling::{select_model, ModelChoice};
use crate::domain::analysis::{AnalysisRequest, StakeInput};
use crate::domain::odds::Side;
use crate::domain::team::Matchup;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::model::ModelConfig;

const DEFAULT_BANKROLL: f64 = 1000.0;
const DEFAULT_KELLY_FRACTION: f64 = 0.5;

/// How the dashboard picks the independent model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelMode {
    #[default]
    Ratings,
    Supplied,
    Market,
}

/// Last answers given in the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub home: String,
    pub away: String,
    pub home_odds: f64,
    pub away_odds: f64,
    #[serde(default)]
    pub model: ModelMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_home_probability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bet_side: Option<Side>,
    #[serde(default = "default_bankroll")]
    pub bankroll: f64,
    #[serde(default = "default_kelly_fraction")]
    pub kelly_fraction: f64,
}

const fn default_bankroll() -> f64 {
    DEFAULT_BANKROLL
}

const fn default_kelly_fraction() -> f64 {
    DEFAULT_KELLY_FRACTION
}

impl Default for Session {
    fn default() -> Self {
        Self {
            home: "New York Knicks".into(),
            away: "Miami Heat".into(),
            home_odds: 1.53,
            away_odds: 4.50,
            model: ModelMode::default(),
            model_home_probability: None,
            bet_side: None,
            bankroll: DEFAULT_BANKROLL,
            kelly_fraction: DEFAULT_KELLY_FRACTION,
        }
    }
}

impl Session {
    /// Read a saved session. Missing or unreadable files yield `None`.
    #[must_use]
    pub fn load(path: &Path) -> Option<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no saved session");
            return None;
        }
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()));
        match parsed {
            Ok(session) => Some(session),
            Err(error) => {
                warn!(path = %path.display(), %error, "ignoring unreadable session file");
                None
            }
        }
    }

    /// Write the session, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        debug!(path = %path.display(), "saved session");
        Ok(())
    }

    #[must_use]
    pub fn model_choice(&self) -> ModelChoice {
        match self.model {
            ModelMode::Ratings => ModelChoice::Ratings,
            ModelMode::Supplied => self
                .model_home_probability
                .map_or(ModelChoice::None, ModelChoice::Supplied),
            ModelMode::Market => ModelChoice::None,
        }
    }

    #[must_use]
    pub fn matchup(&self) -> Matchup {
        Matchup::new(&self.home, &self.away)
    }

    /// Calculator request for these answers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::UnknownTeam`] in ratings mode when a
    /// team is not in the directory.
    pub fn request(
        &self,
        directory: &TeamDirectory,
        model_config: &ModelConfig,
    ) -> Result<AnalysisRequest> {
        let matchup = self.matchup();
        let model = select_model(
            self.model_choice(),
            &matchup,
            directory,
            &model_config.rating_model(),
        )?;
        let request = AnalysisRequest::new(matchup, self.home_odds, self.away_odds)
            .with_model(model)
            .with_edge_threshold(model_config.edge_threshold);

        Ok(match self.bet_side {
            Some(side) => request.with_stake(StakeInput {
                side,
                bankroll: self.bankroll,
                kelly_fraction: self.kelly_fraction,
            }),
            None => request,
        })
    }
}
