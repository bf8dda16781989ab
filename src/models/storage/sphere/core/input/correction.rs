use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::support::interpolation;

/// Operator-entered linear range for liquid density vs. liquid temperature.
///
/// The operator reads the two rows bracketing the day's liquid temperature
/// off the product's density correction sheet. The range is per-calculation
/// configuration, not calibration data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCorrection {
    /// Lower bound of the liquid temperature bracket, in °C.
    pub tl_min: Decimal,

    /// Upper bound of the liquid temperature bracket, in °C.
    pub tl_max: Decimal,

    /// Sheet density at `tl_min`.
    pub d_min: Decimal,

    /// Sheet density at `tl_max`.
    pub d_max: Decimal,
}

impl DensityCorrection {
    /// Density correction at the measured liquid temperature.
    ///
    /// Equal temperature bounds pin the curve to `d_min`.
    #[must_use]
    pub fn density_at(&self, liquid_temperature_c: Decimal) -> Decimal {
        interpolation::linear(
            liquid_temperature_c,
            self.tl_min,
            self.tl_max,
            self.d_min,
            self.d_max,
        )
    }
}

/// Operator-entered linear range for specific gravity vs. gas temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityCorrection {
    /// Lower bound of the gas temperature bracket, in °C.
    pub tg_min: Decimal,

    /// Upper bound of the gas temperature bracket, in °C.
    pub tg_max: Decimal,

    /// Sheet specific gravity at `tg_min`.
    pub ps_min: Decimal,

    /// Sheet specific gravity at `tg_max`.
    pub ps_max: Decimal,
}

impl GravityCorrection {
    /// Specific gravity at the measured gas temperature, in working units.
    ///
    /// The correction sheet lists values a thousandfold larger than the
    /// working unit, so the interpolated value is divided by 1000. Equal
    /// temperature bounds pin the curve to `ps_min / 1000`.
    #[must_use]
    pub fn specific_gravity_at(&self, gas_temperature_c: Decimal) -> Decimal {
        interpolation::linear(
            gas_temperature_c,
            self.tg_min,
            self.tg_max,
            self.ps_min,
            self.ps_max,
        ) / dec!(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_interpolates_within_the_bracket() {
        let correction = DensityCorrection {
            tl_min: dec!(20),
            tl_max: dec!(25),
            d_min: dec!(540),
            d_max: dec!(535),
        };

        assert_eq!(correction.density_at(dec!(22.5)), dec!(537.5));
    }

    #[test]
    fn equal_temperature_bounds_pin_density_to_d_min() {
        let correction = DensityCorrection {
            tl_min: dec!(24),
            tl_max: dec!(24),
            d_min: dec!(540.3),
            d_max: dec!(535.1),
        };

        // Whatever the measured temperature, a degenerate range is constant.
        assert_eq!(correction.density_at(dec!(24)), dec!(540.3));
        assert_eq!(correction.density_at(dec!(31.7)), dec!(540.3));
    }

    #[test]
    fn specific_gravity_converts_to_working_units() {
        let correction = GravityCorrection {
            tg_min: dec!(20),
            tg_max: dec!(30),
            ps_min: dec!(2.5),
            ps_max: dec!(2.7),
        };

        assert_eq!(correction.specific_gravity_at(dec!(25)), dec!(0.0026));
    }

    #[test]
    fn equal_temperature_bounds_pin_gravity_to_ps_min() {
        let correction = GravityCorrection {
            tg_min: dec!(26),
            tg_max: dec!(26),
            ps_min: dec!(2.6),
            ps_max: dec!(9.9),
        };

        assert_eq!(correction.specific_gravity_at(dec!(28)), dec!(0.0026));
    }
}
