//! Model edge over the market, and the verdict it supports.

use serde::Serialize;

use super::model::{ModelProbabilities, ModelSource};
use super::odds::Side;
use super::probability::ImpliedProbabilities;

/// Default home-edge magnitude needed before the market is called wrong.
pub const DEFAULT_EDGE_THRESHOLD: f64 = 0.05;

/// Per-side edge of a model over the market.
///
/// `home`/`away` measure against the de-margined probabilities,
/// `raw_home`/`raw_away` against the raw implied ones. `Unavailable` is
/// distinct from a measured zero edge: it means no independent model existed
/// for the matchup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EdgeEstimate {
    Available {
        home: f64,
        away: f64,
        raw_home: f64,
        raw_away: f64,
        source: ModelSource,
    },
    Unavailable,
}

impl EdgeEstimate {
    /// `model(side) - normalized(side)` and `model(side) - raw(side)` for
    /// both sides, or `Unavailable` when there is no model.
    #[must_use]
    pub fn measure(implied: &ImpliedProbabilities, model: Option<&ModelProbabilities>) -> Self {
        match model {
            Some(model) => Self::Available {
                home: model.home - implied.home,
                away: model.away - implied.away,
                raw_home: model.home - implied.home_raw,
                raw_away: model.away - implied.away_raw,
                source: model.source,
            },
            None => Self::Unavailable,
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Edge over the fair probability for one side; `None` when unavailable.
    #[must_use]
    pub const fn get(&self, side: Side) -> Option<f64> {
        match (self, side) {
            (Self::Available { home, .. }, Side::Home) => Some(*home),
            (Self::Available { away, .. }, Side::Away) => Some(*away),
            (Self::Unavailable, _) => None,
        }
    }

    /// Edge over the raw implied probability for one side.
    #[must_use]
    pub const fn raw(&self, side: Side) -> Option<f64> {
        match (self, side) {
            (Self::Available { raw_home, .. }, Side::Home) => Some(*raw_home),
            (Self::Available { raw_away, .. }, Side::Away) => Some(*raw_away),
            (Self::Unavailable, _) => None,
        }
    }

    /// Side with the larger positive edge, if any.
    #[must_use]
    pub fn favored_side(&self) -> Option<Side> {
        match self {
            Self::Available { home, away, .. } if *home > 0.0 && *home >= *away => Some(Side::Home),
            Self::Available { away, .. } if *away > 0.0 => Some(Side::Away),
            _ => None,
        }
    }

    /// Verdict on the home side at `threshold`; `None` without a model.
    #[must_use]
    pub fn recommend(&self, threshold: f64) -> Option<Recommendation> {
        self.get(Side::Home)
            .map(|edge| Recommendation::classify(edge, threshold))
    }
}

/// Three-way verdict on the home side's fair edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// The model rates home above the market by more than the threshold.
    PositiveEdge,
    /// The market rates home above the model by more than the threshold.
    Avoid,
    /// The edge is within the threshold either way.
    NoClearValue,
}

impl Recommendation {
    /// Classify a home edge. Both bounds are strict, so an edge of exactly
    /// `threshold` is no clear value.
    #[must_use]
    pub fn classify(home_edge: f64, threshold: f64) -> Self {
        if home_edge > threshold {
            Self::PositiveEdge
        } else if home_edge < -threshold {
            Self::Avoid
        } else {
            Self::NoClearValue
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PositiveEdge => "positive_edge",
            Self::Avoid => "avoid",
            Self::NoClearValue => "no_clear_value",
        }
    }

    /// One-line explanation for terminal output.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::PositiveEdge => "positive edge on home, consider a bet",
            Self::Avoid => "market rates home well above the model, avoid",
            Self::NoClearValue => "no clear value, edge is small",
        }
    }
}
