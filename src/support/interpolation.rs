//! Linear interpolation in decimal arithmetic.

use rust_decimal::Decimal;

/// Linearly interpolates `y` at `x` between two known points.
///
/// Computes `y_min + (y_max - y_min) / (x_max - x_min) * (x - x_min)` in
/// decimal arithmetic.
///
/// When `x_max == x_min` the bracket is degenerate and `y_min` is returned
/// unchanged. This is a defined policy, not an error: gauging-table bounds
/// collapse to a single row whenever the measured height lands on a table
/// step, and operators may enter equal min/max correction bounds to pin a
/// curve to a constant.
#[must_use]
pub fn linear(
    x: Decimal,
    x_min: Decimal,
    x_max: Decimal,
    y_min: Decimal,
    y_max: Decimal,
) -> Decimal {
    let span = x_max - x_min;
    if span.is_zero() {
        return y_min;
    }
    y_min + (y_max - y_min) / span * (x - x_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn matches_endpoints_exactly() {
        let y_lo = linear(dec!(0), dec!(0), dec!(10), dec!(2706.3), dec!(2724.1));
        let y_hi = linear(dec!(10), dec!(0), dec!(10), dec!(2706.3), dec!(2724.1));

        assert_eq!(y_lo, dec!(2706.3));
        assert_eq!(y_hi, dec!(2724.1));
    }

    #[test]
    fn interpolates_between_points() {
        let y = linear(dec!(5), dec!(0), dec!(10), dec!(100), dec!(200));
        assert_eq!(y, dec!(150));
    }

    #[test]
    fn degenerate_bracket_returns_y_min() {
        // Equal bounds must not divide by zero, whatever x is.
        let y = linear(dec!(17.4), dec!(17), dec!(17), dec!(540.3), dec!(999));
        assert_eq!(y, dec!(540.3));
    }

    #[test]
    fn non_decreasing_within_an_increasing_bracket() {
        let xs = [dec!(1001), dec!(1002.5), dec!(1005), dec!(1008), dec!(1010)];

        let mut previous = linear(dec!(1000), dec!(1000), dec!(1010), dec!(10000), dec!(10100));
        for x in xs {
            let y = linear(x, dec!(1000), dec!(1010), dec!(10000), dec!(10100));
            assert!(y >= previous, "volume decreased at {x}: {y} < {previous}");
            previous = y;
        }
    }
}
