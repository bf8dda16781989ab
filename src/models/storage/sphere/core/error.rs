use rust_decimal::Decimal;
use thiserror::Error;

use super::SphereId;

/// The calibration table does not bracket the requested height.
///
/// This is the only error the gauging model can raise: the table is empty,
/// the height lies outside its covered range, or an expected exact 10 mm row
/// is absent for spheres 2/3. It is fatal to the single calculation — the
/// table is fixed input, so retrying cannot change the outcome. The caller
/// surfaces it to the operator and/or re-imports a corrected table.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("calibration table does not bracket height {height_mm} mm for sphere {sphere}")]
pub struct CalibrationDataMissing {
    /// Sphere whose table was searched.
    pub sphere: SphereId,

    /// Requested height, in millimeters.
    pub height_mm: Decimal,
}
