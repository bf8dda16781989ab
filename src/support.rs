//! Supporting utilities used by models.
//!
//! Everything here is numeric plumbing shared across models: the linear
//! interpolation primitive the gauging tables are read through, and the
//! half-up rounding applied at fixed points of each formula chain.

pub mod interpolation;
pub mod rounding;
