//! Kelly criterion stake sizing.
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b = (p*odds - 1) / (odds - 1)
//!
//! Where:
//!     f* = fraction of bankroll to bet
//!     b = odds - 1 (net odds)
//!     p = probability of winning
//!     q = 1 - p (probability of losing)
//!     odds = decimal odds (e.g., 2.0 means 2x return)
//!
//! `f*` is clamped to `[0, 1]` before the fractional multiplier is applied,
//! so a negative-edge bet sizes to zero rather than a short position.

use serde::Serialize;
use tracing::debug;

use super::error::DomainError;
use super::model::ModelSource;
use super::money::{to_currency, Money};
use super::odds::{OddsQuote, Side};

/// Full (unclamped) Kelly fraction for a bet.
///
/// Can be negative when `p * odds < 1`.
///
/// # Examples
/// ```
/// use courtedge::domain::stake::kelly_fraction;
/// let kelly = kelly_fraction(0.7, 2.0);
/// assert!((kelly - 0.4).abs() < 1e-12);
/// ```
#[must_use]
pub fn kelly_fraction(probability: f64, odds: f64) -> f64 {
    (probability * odds - 1.0) / (odds - 1.0)
}

/// Kelly fraction clamped to `[0, 1]`.
#[must_use]
pub fn clamped_kelly_fraction(probability: f64, odds: f64) -> f64 {
    kelly_fraction(probability, odds).clamp(0.0, 1.0)
}

/// Validated stake sizing inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StakeRequest {
    side: Side,
    bankroll: f64,
    kelly_fraction: f64,
}

impl StakeRequest {
    /// Validate bankroll and Kelly multiplier.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidBankroll`] when `bankroll` is negative, not
    ///   finite, or too large to express as a currency amount.
    /// - [`DomainError::InvalidKellyFraction`] unless `0 < kelly_fraction <= 1`.
    pub fn try_new(side: Side, bankroll: f64, kelly_fraction: f64) -> Result<Self, DomainError> {
        if !bankroll.is_finite() || bankroll < 0.0 || to_currency(bankroll).is_none() {
            return Err(DomainError::InvalidBankroll { bankroll });
        }
        if !kelly_fraction.is_finite() || kelly_fraction <= 0.0 || kelly_fraction > 1.0 {
            return Err(DomainError::InvalidKellyFraction {
                fraction: kelly_fraction,
            });
        }
        Ok(Self {
            side,
            bankroll,
            kelly_fraction,
        })
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    #[must_use]
    pub const fn kelly_fraction(&self) -> f64 {
        self.kelly_fraction
    }
}

/// Which probability fed the Kelly formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilitySource {
    /// An independent model estimate.
    Model(ModelSource),
    /// The de-margined market probability, used when no model exists.
    Market,
}

impl ProbabilitySource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model(source) => source.as_str(),
            Self::Market => "market",
        }
    }
}

/// Stake sizing result for one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StakeRecommendation {
    pub side: Side,
    /// Win probability used for sizing.
    pub probability: f64,
    pub probability_source: ProbabilitySource,
    pub odds: f64,
    /// Kelly fraction after clamping, before the multiplier.
    pub full_kelly: f64,
    /// The Kelly multiplier that was applied.
    pub kelly_multiplier: f64,
    /// `full_kelly * kelly_multiplier`.
    pub fraction_of_bankroll: f64,
    pub bankroll: f64,
    /// Stake rounded to currency precision.
    pub stake_amount: Money,
}

impl StakeRecommendation {
    /// Size a stake for `request.side()` at the given probability and odds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBankroll`] if the stake cannot be
    /// expressed as a currency amount. [`StakeRequest::try_new`] already
    /// rejects such bankrolls.
    pub fn size(
        request: &StakeRequest,
        probability: f64,
        probability_source: ProbabilitySource,
        odds: OddsQuote,
    ) -> Result<Self, DomainError> {
        let full_kelly = clamped_kelly_fraction(probability, odds.value());
        let fraction_of_bankroll = full_kelly * request.kelly_fraction();
        let stake = fraction_of_bankroll * request.bankroll();

        debug!(
            side = %request.side(),
            probability,
            odds = odds.value(),
            full_kelly,
            fraction_of_bankroll,
            stake,
            "sized Kelly stake"
        );

        let stake_amount = to_currency(stake).ok_or(DomainError::InvalidBankroll {
            bankroll: request.bankroll(),
        })?;

        Ok(Self {
            side: request.side(),
            probability,
            probability_source,
            odds: odds.value(),
            full_kelly,
            kelly_multiplier: request.kelly_fraction(),
            fraction_of_bankroll,
            bankroll: request.bankroll(),
            stake_amount,
        })
    }

    /// Whether the recommendation is to stay out.
    #[must_use]
    pub fn is_no_bet(&self) -> bool {
        self.stake_amount.is_zero()
    }
}
