//! Gauging and inventory models.
//!
//! Models are the primary public interface of this crate, grouped by the
//! part of the site they describe: [`storage`] for the vessels themselves,
//! [`inventory`] for product accounting.
//!
//! Each model keeps its computation in an internal `core` submodule and
//! re-exports only the types and entry points callers are meant to use. The
//! `core` layout is an implementation detail and may be reorganized freely.

pub mod inventory;
pub mod storage;
