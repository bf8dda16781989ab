use rust_decimal::Decimal;

/// One sample of a sphere's calibration table.
///
/// A table is a sequence of samples ordered by ascending height, taken from
/// the sphere's gauging sheet. Tables are owned by the calling context and
/// borrowed read-only for the duration of one calculation; a table may be
/// shared across concurrent calculations as long as it is not mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// Liquid height, in millimeters.
    pub height_mm: u32,

    /// Liquid volume contained at that height, in liters.
    pub capacity_l: Decimal,
}
