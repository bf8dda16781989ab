//! Cylinder stock ledger calculations.
//!
//! The bottle parks are tracked as a ledger of movements: entries, exits,
//! and periodic physical counts. A count resets the running position — the
//! counted stock becomes the new opening figure and the cumulative sums
//! start over — so the theoretical stock is always relative to the most
//! recent inventory. Quantities are units of the tracked article (cylinders
//! for the bottle parks), in decimal arithmetic so repeated sums never
//! drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::support::rounding;

/// One movement in a stock ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockMovement {
    /// Quantity received into the stock.
    Entry(Decimal),

    /// Quantity issued out of the stock.
    Exit(Decimal),

    /// A physical count. Resets the running position: the counted stock
    /// becomes the new opening figure and the cumulative sums start over.
    Inventory(Decimal),
}

/// Consolidated position of one stock line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockPosition {
    /// Stock counted at the most recent inventory, or zero if the ledger
    /// holds none.
    pub opening: Decimal,

    /// Cumulative entries since the most recent inventory.
    pub entries: Decimal,

    /// Cumulative exits since the most recent inventory.
    pub exits: Decimal,

    /// Opening stock plus entries minus exits.
    pub theoretical: Decimal,

    /// Counted stock at the most recent inventory, if any.
    pub last_count: Option<Decimal>,
}

/// Theoretical stock: opening stock plus entries minus exits.
#[must_use]
pub fn theoretical_stock(opening: Decimal, entries: Decimal, exits: Decimal) -> Decimal {
    opening + entries - exits
}

/// Walks a ledger into its consolidated position.
///
/// The ledger must be in chronological order; it is supplied that way by the
/// movement log.
#[must_use]
pub fn position(ledger: &[StockMovement]) -> StockPosition {
    let mut opening = Decimal::ZERO;
    let mut entries = Decimal::ZERO;
    let mut exits = Decimal::ZERO;
    let mut last_count = None;

    for movement in ledger {
        match *movement {
            StockMovement::Entry(quantity) => entries += quantity,
            StockMovement::Exit(quantity) => exits += quantity,
            StockMovement::Inventory(counted) => {
                opening = counted;
                last_count = Some(counted);
                entries = Decimal::ZERO;
                exits = Decimal::ZERO;
            }
        }
    }

    StockPosition {
        opening,
        entries,
        exits,
        theoretical: theoretical_stock(opening, entries, exits),
        last_count,
    }
}

/// Whether the available stock covers a requested withdrawal.
///
/// Inclusive: a request for exactly the available quantity is covered.
#[must_use]
pub fn is_sufficient(available: Decimal, requested: Decimal) -> bool {
    available >= requested
}

/// Share of `total` currently held, as a percentage at one decimal place.
///
/// A non-positive total yields zero rather than a division by zero.
#[must_use]
pub fn percentage(current: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    rounding::half_up(current / total * dec!(100), 1)
}
