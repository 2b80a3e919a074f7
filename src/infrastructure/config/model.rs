//! Rating model parameters.

use serde::{Deserialize, Serialize};

use crate::domain::edge::DEFAULT_EDGE_THRESHOLD;
use crate::domain::model::{RatingModel, DEFAULT_HOME_ADVANTAGE, DEFAULT_RATING_WEIGHT};

/// Net-rating heuristic parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Probability added to the home side before clamping.
    #[serde(default = "default_home_advantage")]
    pub home_advantage: f64,
    /// Probability shift per point of net-rating difference.
    #[serde(default = "default_rating_weight")]
    pub rating_weight: f64,
    /// Home edge beyond which the verdict is a positive edge or avoid.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f64,
}

const fn default_home_advantage() -> f64 {
    DEFAULT_HOME_ADVANTAGE
}

const fn default_rating_weight() -> f64 {
    DEFAULT_RATING_WEIGHT
}

const fn default_edge_threshold() -> f64 {
    DEFAULT_EDGE_THRESHOLD
}

impl ModelConfig {
    #[must_use]
    pub const fn rating_model(&self) -> RatingModel {
        RatingModel::new(self.home_advantage, self.rating_weight)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            home_advantage: default_home_advantage(),
            rating_weight: default_rating_weight(),
            edge_threshold: default_edge_threshold(),
        }
    }
}
