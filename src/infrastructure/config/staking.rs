//! Stake sizing defaults.

use serde::{Deserialize, Serialize};

/// Defaults applied when the command line leaves stake inputs unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StakingConfig {
    /// Fraction of full Kelly to stake, in `(0, 1]`.
    #[serde(default = "default_kelly_fraction")]
    pub kelly_fraction: f64,
    /// Bankroll used when `--bankroll` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bankroll: Option<f64>,
}

const fn default_kelly_fraction() -> f64 {
    1.0
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            kelly_fraction: default_kelly_fraction(),
            bankroll: None,
        }
    }
}
