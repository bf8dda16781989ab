mod calibration;
mod correction;
mod measurement;
mod sphere_id;

pub use calibration::CalibrationPoint;
pub use correction::{DensityCorrection, GravityCorrection};
pub use measurement::SphereInputData;
pub use sphere_id::{SphereId, TableResolution};
