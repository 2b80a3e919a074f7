//! Decimal odds quotes and two-outcome markets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// One side of a two-outcome matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The home team.
    Home,
    /// The away team.
    Away,
}

impl Side {
    /// Both sides in display order.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    /// Lowercase name used on the command line and in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Self::Home),
            "away" | "a" => Ok(Self::Away),
            other => Err(format!("unknown side '{other}' (expected home or away)")),
        }
    }
}

/// A validated decimal odds quote.
///
/// Always finite and strictly greater than 1.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct OddsQuote(f64);

impl OddsQuote {
    /// Validate a raw quote for the given side.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOdds`] when the value is non-finite or
    /// not strictly greater than 1.0.
    pub fn try_new(side: Side, value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value <= 1.0 {
            return Err(DomainError::InvalidOdds { side, value });
        }
        Ok(Self(value))
    }

    /// The decimal odds value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Raw implied probability, `1 / odds`.
    #[must_use]
    pub fn implied_probability(self) -> f64 {
        1.0 / self.0
    }

    /// Net odds, `odds - 1`. Always positive.
    #[must_use]
    pub fn net(self) -> f64 {
        self.0 - 1.0
    }
}

impl fmt::Display for OddsQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Home and away quotes for one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Market {
    home_odds: OddsQuote,
    away_odds: OddsQuote,
}

impl Market {
    /// Build a market from validated quotes.
    #[must_use]
    pub const fn new(home_odds: OddsQuote, away_odds: OddsQuote) -> Self {
        Self {
            home_odds,
            away_odds,
        }
    }

    /// Validate both raw quotes and build a market.
    ///
    /// The home quote is checked first, so a market with two bad quotes
    /// reports the home side.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOdds`] for the first invalid quote.
    pub fn try_new(home_odds: f64, away_odds: f64) -> Result<Self, DomainError> {
        Ok(Self::new(
            OddsQuote::try_new(Side::Home, home_odds)?,
            OddsQuote::try_new(Side::Away, away_odds)?,
        ))
    }

    #[must_use]
    pub const fn home_odds(&self) -> OddsQuote {
        self.home_odds
    }

    #[must_use]
    pub const fn away_odds(&self) -> OddsQuote {
        self.away_odds
    }

    /// Quote for one side.
    #[must_use]
    pub const fn odds(&self, side: Side) -> OddsQuote {
        match side {
            Side::Home => self.home_odds,
            Side::Away => self.away_odds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_even_money_floor() {
        assert_eq!(
            OddsQuote::try_new(Side::Home, 1.0),
            Err(DomainError::InvalidOdds {
                side: Side::Home,
                value: 1.0
            })
        );
    }

    #[test]
    fn rejects_sub_unit_and_negative_quotes() {
        assert!(OddsQuote::try_new(Side::Home, 0.9).is_err());
        assert!(OddsQuote::try_new(Side::Home, -2.0).is_err());
        assert!(OddsQuote::try_new(Side::Home, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_quotes() {
        assert!(OddsQuote::try_new(Side::Away, f64::NAN).is_err());
        assert!(OddsQuote::try_new(Side::Away, f64::INFINITY).is_err());
        assert!(OddsQuote::try_new(Side::Away, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn accepts_quote_just_above_one() {
        let quote = OddsQuote::try_new(Side::Home, 1.01).unwrap();
        assert!((quote.value() - 1.01).abs() < f64::EPSILON);
    }

    #[test]
    fn market_reports_failing_side() {
        let err = Market::try_new(1.53, 1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidOdds {
                side: Side::Away,
                value: 1.0
            }
        );
    }

    #[test]
    fn market_checks_home_first() {
        let err = Market::try_new(0.5, 0.5).unwrap_err();
        assert!(matches!(err, DomainError::InvalidOdds { side: Side::Home, .. }));
    }

    #[test]
    fn market_odds_by_side() {
        let market = Market::try_new(1.53, 4.50).unwrap();
        assert_eq!(market.odds(Side::Home).value(), 1.53);
        assert_eq!(market.odds(Side::Away).value(), 4.50);
    }

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("HOME".parse::<Side>(), Ok(Side::Home));
        assert_eq!(" away ".parse::<Side>(), Ok(Side::Away));
        assert!("draw".parse::<Side>().is_err());
    }
}
