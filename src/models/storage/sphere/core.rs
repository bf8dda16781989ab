//! Core sphere gauging computation.

mod bounds;
mod calculate;
mod error;
mod input;
mod results;

pub use error::CalibrationDataMissing;
pub use input::{
    CalibrationPoint, DensityCorrection, GravityCorrection, SphereId, SphereInputData,
    TableResolution,
};
pub use results::SphereCalculationResult;

pub(super) use calculate::calculate;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Total internal volume of one sphere, in liters.
///
/// All three spheres share the same geometry; the per-sphere differences live
/// entirely in their calibration tables.
pub const SPHERE_CAPACITY_L: Decimal = dec!(3_323_412.7);

/// Specific gravity of gaseous butane relative to dry air.
pub const BUTANE_GAS_VS_DRY_AIR: Decimal = dec!(2.004);

/// Standard atmosphere, in bar, added to gauge pressure readings.
pub const STANDARD_ATMOSPHERE_BAR: Decimal = dec!(1.01325);

/// Maximum rated mass of one sphere, in kilograms.
///
/// The ullage ("creux") figure is reported against this constant.
pub const RATED_MASS_KG: Decimal = dec!(1_650_000);
