//! Storage vessel models.
//!
//! This module contains models for the site's storage vessels, currently the
//! spherical pressure tanks used for bulk LPG.

pub mod sphere;
