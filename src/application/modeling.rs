//! Choosing the independent model for an analysis.

use tracing::debug;

use crate::domain::analysis::ModelInput;
use crate::domain::model::RatingModel;
use crate::domain::team::Matchup;
use crate::error::Result;

use super::directory::TeamDirectory;

/// How the caller wants the model chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelChoice {
    /// Use this home-win probability.
    Supplied(f64),
    /// Estimate from team ratings when both are known.
    Ratings,
    /// Analyze against the market only.
    None,
}

/// Resolve a [`ModelChoice`] into calculator input.
///
/// Known teams without a net rating leave the model absent.
///
/// # Errors
///
/// With [`ModelChoice::Ratings`], returns [`crate::error::Error::UnknownTeam`]
/// when either team is not in the directory.
pub fn select_model(
    choice: ModelChoice,
    matchup: &Matchup,
    directory: &TeamDirectory,
    rating_model: &RatingModel,
) -> Result<ModelInput> {
    match choice {
        ModelChoice::Supplied(home) => Ok(ModelInput::Supplied(home)),
        ModelChoice::None => Ok(ModelInput::Absent),
        ModelChoice::Ratings => {
            let home = directory.require(&matchup.home)?.net_rating;
            let away = directory.require(&matchup.away)?.net_rating;

            Ok(match rating_model.estimate(home, away) {
                Some(estimate) => {
                    debug!(
                        home_rating = home,
                        away_rating = away,
                        home_probability = estimate.home,
                        "estimated model from ratings"
                    );
                    ModelInput::Estimated(estimate)
                }
                None => {
                    debug!(matchup = %matchup, "no ratings for matchup, model absent");
                    ModelInput::Absent
                }
            })
        }
    }
}
