//! Sphere gauging model.
//!
//! Converts one set of field measurements on a spherical LPG tank into
//! custody-transfer inventory figures, using the sphere's calibration table
//! (height → liquid volume) and operator-entered correction curves. The
//! computational core is in the internal [`core`] module.

mod core;

pub use self::core::{
    CalibrationDataMissing, CalibrationPoint, DensityCorrection, GravityCorrection, RATED_MASS_KG,
    SphereCalculationResult, SphereId, SphereInputData, TableResolution,
};

/// Computes the full gauging result for one sphere measurement.
///
/// `table` is the calibration table for `input.sphere`, ordered by ascending
/// height. It is borrowed read-only for the duration of the call and may be
/// shared across any number of concurrent calculations.
///
/// # Errors
///
/// Returns [`CalibrationDataMissing`] if the table does not bracket the
/// measured height. This is fatal to the calculation; retrying cannot help
/// because the table is fixed input.
pub fn calculate(
    input: &SphereInputData,
    table: &[CalibrationPoint],
) -> Result<SphereCalculationResult, CalibrationDataMissing> {
    self::core::calculate(input, table)
}
