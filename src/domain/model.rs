//! Independent win-probability estimates.
//!
//! A model probability is an estimate that does not come from the market
//! being analyzed. It is either supplied by the caller or derived from team
//! net ratings by [`RatingModel`].

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::odds::Side;

/// Where a model probability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    /// Given explicitly by the caller.
    Supplied,
    /// Derived from team net ratings.
    Rating,
}

impl ModelSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supplied => "supplied",
            Self::Rating => "rating",
        }
    }
}

/// Home/away win probabilities from an independent model.
///
/// `home + away == 1` and both lie strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelProbabilities {
    pub home: f64,
    pub away: f64,
    pub source: ModelSource,
}

impl ModelProbabilities {
    /// Build from a home-win probability; away is its complement.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidProbability`] unless `0 < home < 1`.
    pub fn from_home(home: f64, source: ModelSource) -> Result<Self, DomainError> {
        if !home.is_finite() || home <= 0.0 || home >= 1.0 {
            return Err(DomainError::InvalidProbability { value: home });
        }
        Ok(Self {
            home,
            away: 1.0 - home,
            source,
        })
    }

    /// Probability for one side.
    #[must_use]
    pub const fn probability(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// Default home-court advantage added to every home probability.
pub const DEFAULT_HOME_ADVANTAGE: f64 = 0.04;

/// Default probability shift per point of net-rating difference.
pub const DEFAULT_RATING_WEIGHT: f64 = 0.015;

const MIN_PROBABILITY: f64 = 0.05;
const MAX_PROBABILITY: f64 = 0.95;

/// Linear net-rating heuristic.
///
/// `p_home = clamp(0.5 + weight * (home_net - away_net) + home_advantage, 0.05, 0.95)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingModel {
    home_advantage: f64,
    rating_weight: f64,
}

impl RatingModel {
    #[must_use]
    pub const fn new(home_advantage: f64, rating_weight: f64) -> Self {
        Self {
            home_advantage,
            rating_weight,
        }
    }

    /// Estimate win probabilities from both teams' net ratings.
    ///
    /// Returns `None` when either rating is unknown or not finite: a missing
    /// rating means there is no model, not an even matchup.
    #[must_use]
    pub fn estimate(
        &self,
        home_net_rating: Option<f64>,
        away_net_rating: Option<f64>,
    ) -> Option<ModelProbabilities> {
        let home_net = home_net_rating.filter(|r| r.is_finite())?;
        let away_net = away_net_rating.filter(|r| r.is_finite())?;

        let diff = home_net - away_net;
        let home = (0.5 + diff * self.rating_weight + self.home_advantage)
            .clamp(MIN_PROBABILITY, MAX_PROBABILITY);

        Some(ModelProbabilities {
            home,
            away: 1.0 - home,
            source: ModelSource::Rating,
        })
    }
}

impl Default for RatingModel {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_ADVANTAGE, DEFAULT_RATING_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supplied_probability_gets_complement() {
        let model = ModelProbabilities::from_home(0.6, ModelSource::Supplied).unwrap();
        assert_eq!(model.home, 0.6);
        assert!((model.away - 0.4).abs() < 1e-12);
        assert_eq!(model.probability(Side::Away), model.away);
    }

    #[test]
    fn supplied_probability_bounds_are_exclusive() {
        for value in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert!(
                ModelProbabilities::from_home(value, ModelSource::Supplied).is_err(),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn equal_ratings_give_home_advantage_only() {
        let model = RatingModel::default().estimate(Some(2.0), Some(2.0)).unwrap();
        assert!((model.home - 0.54).abs() < 1e-12);
        assert_eq!(model.source, ModelSource::Rating);
    }

    #[test]
    fn rating_gap_shifts_probability() {
        let model = RatingModel::default().estimate(Some(5.0), Some(-5.0)).unwrap();
        // 0.5 + 10 * 0.015 + 0.04
        assert!((model.home - 0.69).abs() < 1e-12);
    }

    #[test]
    fn extreme_gaps_are_clamped() {
        let model = RatingModel::default();
        let strong = model.estimate(Some(40.0), Some(-40.0)).unwrap();
        let weak = model.estimate(Some(-40.0), Some(40.0)).unwrap();

        assert_eq!(strong.home, 0.95);
        assert_eq!(weak.home, 0.05);
    }

    #[test]
    fn missing_rating_means_no_model() {
        let model = RatingModel::default();
        assert!(model.estimate(None, Some(1.0)).is_none());
        assert!(model.estimate(Some(1.0), None).is_none());
        assert!(model.estimate(Some(f64::NAN), Some(1.0)).is_none());
    }
}
