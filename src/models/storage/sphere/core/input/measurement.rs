use rust_decimal::Decimal;

use super::{DensityCorrection, GravityCorrection, SphereId};

/// One set of field measurements on a sphere.
///
/// All values are operator-entered and validated by the calling application;
/// the model assumes plausible process ranges (heights within the calibration
/// table, temperatures in ambient/process ranges, small positive gauge
/// pressures, `d15` near 0.5–0.6 for butane-class products).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInputData {
    /// Sphere being gauged.
    pub sphere: SphereId,

    /// Measured liquid height, in millimeters. May be fractional.
    pub height_mm: Decimal,

    /// Liquid phase temperature, in °C.
    pub liquid_temperature_c: Decimal,

    /// Gas phase temperature, in °C.
    pub gas_temperature_c: Decimal,

    /// Tank gauge pressure, in bar(g).
    pub pressure_barg: Decimal,

    /// Reference liquid density declared at 15 °C.
    pub density_d15: Decimal,

    /// Density vs. liquid temperature correction range.
    pub density_correction: DensityCorrection,

    /// Specific gravity vs. gas temperature correction range.
    pub gravity_correction: GravityCorrection,
}
