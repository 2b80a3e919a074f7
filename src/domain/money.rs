//! Currency amounts.
//!
//! Calculations run in `f64`; amounts become [`Money`] only when they leave
//! the calculator.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amount represented as a Decimal for precision.
pub type Money = Decimal;

/// Decimal places kept for currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Round a finite float to currency precision, half away from zero.
///
/// The result always carries exactly two decimal places. Non-finite input
/// yields `None`.
#[must_use]
pub fn to_currency(value: f64) -> Option<Money> {
    Decimal::from_f64(value).map(|amount| {
        let mut amount = amount
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(CURRENCY_SCALE);
        amount
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_float_noise_away() {
        assert_eq!(to_currency(399.999_999_999_999_94), Some(dec!(400.00)));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(to_currency(12.125), Some(dec!(12.13)));
        assert_eq!(to_currency(0.004), Some(dec!(0.00)));
    }

    #[test]
    fn whole_amounts_keep_two_places() {
        assert_eq!(to_currency(250.0).unwrap().to_string(), "250.00");
    }

    #[test]
    fn non_finite_has_no_amount() {
        assert_eq!(to_currency(f64::NAN), None);
        assert_eq!(to_currency(f64::INFINITY), None);
    }
}
