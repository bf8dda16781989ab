//! Site inventory models.
//!
//! This module contains models for reconciling the site's product inventory:
//! the daily stock balance and the cylinder stock ledger.

pub mod balance;
pub mod stock;
