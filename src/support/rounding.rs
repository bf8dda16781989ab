//! Half-up decimal rounding.
//!
//! The gauging formula chain rounds to 0, 4, or 7 decimal places at fixed
//! steps, always half away from zero. Keeping the strategy behind one named
//! function makes those steps read as contract rather than incidental calls.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `dp` decimal places, ties away from zero.
///
/// For the non-negative quantities handled by this crate (volumes, masses,
/// densities) this matches commercial half-up rounding.
#[must_use]
pub fn half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn rounds_ties_up() {
        assert_eq!(half_up(dec!(2.5), 0), dec!(3));
        assert_eq!(half_up(dec!(2.345), 2), dec!(2.35));
        assert_eq!(half_up(dec!(0.54035), 4), dec!(0.5404));
    }

    #[test]
    fn rounds_below_tie_down() {
        assert_eq!(half_up(dec!(2.4999), 0), dec!(2));
        assert_eq!(half_up(dec!(0.00264994), 7), dec!(0.0026499));
    }

    #[test]
    fn keeps_exact_values_exact() {
        assert_eq!(half_up(dec!(1471), 0), dec!(1471));
        assert_eq!(half_up(dec!(0.5403), 4), dec!(0.5403));
    }
}
