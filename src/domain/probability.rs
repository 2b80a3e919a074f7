//! Implied probabilities and overround removal.
//!
//! A decimal quote `o` implies a raw win probability of `1 / o`. The two raw
//! values of a market sum to the overround; dividing each by that sum removes
//! the bookmaker margin and yields a fair (normalized) probability pair.

use serde::Serialize;
use tracing::debug;

use super::error::DomainError;
use super::odds::{Market, Side};

/// Raw and de-margined probabilities for one market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpliedProbabilities {
    /// `1 / home_odds`.
    pub home_raw: f64,
    /// `1 / away_odds`.
    pub away_raw: f64,
    /// `home_raw + away_raw`.
    pub overround: f64,
    /// Normalized home probability.
    pub home: f64,
    /// Normalized away probability.
    pub away: f64,
}

impl ImpliedProbabilities {
    /// Derive implied probabilities from a validated market.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DegenerateMarket`] when the raw sum is not a
    /// positive finite number. Validated quotes never produce that, the check
    /// guards the division below.
    pub fn from_market(market: &Market) -> Result<Self, DomainError> {
        let home_raw = market.home_odds().implied_probability();
        let away_raw = market.away_odds().implied_probability();
        let overround = home_raw + away_raw;

        if !overround.is_finite() || overround <= 0.0 {
            return Err(DomainError::DegenerateMarket { overround });
        }

        let implied = Self {
            home_raw,
            away_raw,
            overround,
            home: home_raw / overround,
            away: away_raw / overround,
        };

        debug!(
            home_raw,
            away_raw,
            overround,
            fair_home = implied.home,
            fair_away = implied.away,
            "removed overround"
        );

        Ok(implied)
    }

    /// Raw implied probability for one side.
    #[must_use]
    pub const fn raw(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_raw,
            Side::Away => self.away_raw,
        }
    }

    /// De-margined probability for one side.
    #[must_use]
    pub const fn normalized(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    /// Bookmaker margin, `overround - 1`. Negative for generous quotes.
    #[must_use]
    pub fn margin(&self) -> f64 {
        self.overround - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implied(home: f64, away: f64) -> ImpliedProbabilities {
        ImpliedProbabilities::from_market(&Market::try_new(home, away).unwrap()).unwrap()
    }

    #[test]
    fn reference_matchup_probabilities() {
        let p = implied(1.53, 4.50);

        assert!((p.home_raw - 0.653_594_771).abs() < 1e-6);
        assert!((p.away_raw - 0.222_222_222).abs() < 1e-6);
        assert!((p.overround - 0.875_817).abs() < 1e-4);
        assert!((p.home - 0.7463).abs() < 1e-3);
        assert!((p.away - 0.2537).abs() < 1e-3);
        assert!((p.home + p.away - 1.0).abs() < 1e-9);
    }

    #[test]
    fn even_market_with_margin() {
        let p = implied(1.90, 1.90);

        assert!((p.home - 0.5).abs() < 1e-12);
        assert!((p.away - 0.5).abs() < 1e-12);
        assert!(p.margin() > 0.05);
    }

    #[test]
    fn generous_quotes_have_negative_margin() {
        let p = implied(1.53, 4.50);
        assert!(p.margin() < 0.0);
    }

    #[test]
    fn accessors_match_fields() {
        let p = implied(2.0, 3.0);
        assert_eq!(p.raw(Side::Home), p.home_raw);
        assert_eq!(p.raw(Side::Away), p.away_raw);
        assert_eq!(p.normalized(Side::Home), p.home);
        assert_eq!(p.normalized(Side::Away), p.away);
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let first = implied(1.87, 2.05);
        let second = implied(1.87, 2.05);

        assert_eq!(first.home.to_bits(), second.home.to_bits());
        assert_eq!(first.away.to_bits(), second.away.to_bits());
        assert_eq!(first.overround.to_bits(), second.overround.to_bits());
    }
}
