//! Calibration-table bounds resolution.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{CalibrationDataMissing, CalibrationPoint, SphereId, TableResolution};

/// The two calibration rows bracketing a measured height.
///
/// The bounds may be equal; the volume interpolation then degenerates to the
/// row's capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Height of the lower bounding row, in millimeters.
    pub height_min: Decimal,

    /// Height of the upper bounding row, in millimeters.
    pub height_max: Decimal,

    /// Capacity of the lower bounding row, in liters.
    pub capacity_min: Decimal,

    /// Capacity of the upper bounding row, in liters.
    pub capacity_max: Decimal,
}

/// Finds the calibration rows bracketing `height_mm` for one sphere.
///
/// The table must be ordered by ascending height; it is supplied that way by
/// the gauging-sheet import.
///
/// # Errors
///
/// Returns [`CalibrationDataMissing`] if no bracketing pair exists.
pub fn resolve(
    table: &[CalibrationPoint],
    sphere: SphereId,
    height_mm: Decimal,
) -> Result<Bounds, CalibrationDataMissing> {
    match sphere.resolution() {
        TableResolution::OneMm => resolve_one_mm(table, sphere, height_mm),
        TableResolution::TenMm => resolve_ten_mm(table, sphere, height_mm),
    }
}

/// Bracket lookup for a 1 mm-stepped table.
///
/// Scans once in ascending order: the last row at or below the floored height
/// becomes the lower bound, and the first row at or above it the upper bound.
/// A 1 mm table normally holds a row at exactly the floored height, so both
/// bounds land on that row and sub-millimeter readings do not interpolate.
/// That collapse matches the issued gauging sheets and the figures operations
/// has signed off on; confirm with the product owner before changing it.
fn resolve_one_mm(
    table: &[CalibrationPoint],
    sphere: SphereId,
    height_mm: Decimal,
) -> Result<Bounds, CalibrationDataMissing> {
    let floored = height_mm.floor();

    let mut lower = None;
    let mut upper = None;
    for point in table {
        let row_height = Decimal::from(point.height_mm);
        if row_height <= floored {
            lower = Some(point);
        }
        if row_height >= floored {
            upper = Some(point);
            break;
        }
    }

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(bounds_between(lower, upper)),
        _ => Err(CalibrationDataMissing { sphere, height_mm }),
    }
}

/// Bracket lookup for a 10 mm-stepped table.
///
/// The bracketing heights are the enclosing multiples of 10; both rows must
/// be present in the table at exactly those heights.
fn resolve_ten_mm(
    table: &[CalibrationPoint],
    sphere: SphereId,
    height_mm: Decimal,
) -> Result<Bounds, CalibrationDataMissing> {
    const STEP: Decimal = dec!(10);

    let height_min = (height_mm / STEP).floor() * STEP;
    let height_max = (height_mm / STEP).ceil() * STEP;

    let lower = table
        .iter()
        .find(|point| Decimal::from(point.height_mm) == height_min);
    let upper = table
        .iter()
        .find(|point| Decimal::from(point.height_mm) == height_max);

    match (lower, upper) {
        (Some(lower), Some(upper)) => Ok(bounds_between(lower, upper)),
        _ => Err(CalibrationDataMissing { sphere, height_mm }),
    }
}

fn bounds_between(lower: &CalibrationPoint, upper: &CalibrationPoint) -> Bounds {
    Bounds {
        height_min: Decimal::from(lower.height_mm),
        height_max: Decimal::from(upper.height_mm),
        capacity_min: lower.capacity_l,
        capacity_max: upper.capacity_l,
    }
}
