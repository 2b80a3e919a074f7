//! Domain validation errors for core calculator types.
//!
//! This module defines errors that occur when calculator invariants are
//! violated. They are returned by `try_new` constructors and by the
//! calculator operations themselves, and are never swallowed inside the
//! domain: callers decide how to present them.
//!
//! # Examples
//!
//! ```
//! use courtedge::domain::error::DomainError;
//! use courtedge::domain::odds::{OddsQuote, Side};
//!
//! let result = OddsQuote::try_new(Side::Home, 1.0);
//! assert!(matches!(result, Err(DomainError::InvalidOdds { .. })));
//! ```

use thiserror::Error;

use super::odds::Side;

/// Errors that occur when calculator invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Decimal odds must be finite and strictly greater than 1.0.
    #[error("invalid {side} odds {value}: decimal odds must be finite and greater than 1.0")]
    InvalidOdds {
        /// Side the quote belongs to.
        side: Side,
        /// The rejected quote.
        value: f64,
    },

    /// Summed implied probability must be positive and finite.
    #[error("degenerate market: combined implied probability {overround} is not positive")]
    DegenerateMarket {
        /// The rejected raw implied sum.
        overround: f64,
    },

    /// Bankroll must be finite, non-negative and fit a currency amount.
    #[error("invalid bankroll {bankroll}: must be 0 or greater and within currency range")]
    InvalidBankroll {
        /// The rejected bankroll.
        bankroll: f64,
    },

    /// Kelly multiplier must lie in `(0, 1]`.
    #[error("invalid Kelly fraction {fraction}: must be greater than 0 and at most 1")]
    InvalidKellyFraction {
        /// The rejected multiplier.
        fraction: f64,
    },

    /// Edge threshold must lie in `[0, 1)`.
    #[error("invalid edge threshold {threshold}: must be at least 0 and below 1")]
    InvalidEdgeThreshold {
        /// The rejected threshold.
        threshold: f64,
    },
    /// Model probability must lie strictly between 0 and 1.
    #[error("invalid model probability {value}: must be strictly between 0 and 1")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
}
