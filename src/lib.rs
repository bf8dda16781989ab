//! # Sphere Gauging
//!
//! Volumetric and mass gauging models for spherical LPG storage tanks.
//!
//! ## Crate layout
//!
//! - [`models`]: Gauging and inventory models, the primary public interface.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Numeric discipline
//!
//! Every model in this crate computes in fixed-point decimal arithmetic
//! ([`rust_decimal::Decimal`]) rather than binary floats. Gauging results are
//! custody-transfer figures: the rounding steps (and their order) are part of
//! each model's contract, and a binary-float rendition would drift in the
//! least significant digits between runs of the surrounding application and
//! the reference gauging sheets.
//!
//! ## Support modules
//!
//! The [`support`] modules are exported so callers can reuse the numeric
//! plumbing, but they follow the models' needs first: expect their shape to
//! change between releases without notice.

pub mod models;
pub mod support;
