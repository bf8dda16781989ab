use std::fmt;

/// Identifies one of the site's three storage spheres.
///
/// The identifier fixes the resolution of the sphere's calibration table;
/// everything else in a calculation is common to all spheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SphereId {
    One,
    Two,
    Three,
}

impl SphereId {
    /// Calibration-table resolution for this sphere.
    ///
    /// Sphere 1 is gauged at 1 mm steps; spheres 2 and 3 at 10 mm steps.
    #[must_use]
    pub fn resolution(self) -> TableResolution {
        match self {
            Self::One => TableResolution::OneMm,
            Self::Two | Self::Three => TableResolution::TenMm,
        }
    }
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        };
        write!(f, "{number}")
    }
}

/// Height step of a sphere's calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableResolution {
    /// A table row every millimeter.
    OneMm,

    /// A table row every 10 millimeters.
    TenMm,
}
