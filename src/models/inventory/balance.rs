//! Daily stock balance settlement.
//!
//! Reconciles the day's movements against the counted closing stock:
//! theoretical stock is opening stock plus receipts minus issues, and the
//! variance is the counted closing stock minus that theoretical figure. All
//! quantities are kilograms of product, in decimal arithmetic so repeated
//! sums never drift.

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// Product counted in each storage class at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StockCount {
    /// Product held in the spheres, in kilograms.
    pub spheres_kg: Decimal,

    /// Product held in filled cylinders, in kilograms.
    pub cylinders_kg: Decimal,

    /// Product held in the fixed reservoirs, in kilograms.
    pub reservoirs_kg: Decimal,
}

impl StockCount {
    /// Total counted product, in kilograms.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.spheres_kg + self.cylinders_kg + self.reservoirs_kg
    }
}

/// One day's movements and counts, as entered by the operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSheet {
    /// Stock counted at the start of the day.
    pub opening: StockCount,

    /// Stock counted at the end of the day.
    pub closing: StockCount,

    /// Quantities received from carriers, in kilograms.
    pub receipts_kg: Vec<Decimal>,

    /// Bulk deliveries issued to customers, in kilograms.
    pub bulk_issues_kg: Vec<Decimal>,

    /// Packaged (cylinder) product issued, in kilograms.
    pub packaged_issues_kg: Vec<Decimal>,

    /// Product lost to leaking cylinders, in kilograms.
    pub leaker_losses_kg: Vec<Decimal>,
}

/// Settled figures for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    /// Opening stock total, in kilograms.
    pub opening_stock_kg: Decimal,

    /// Sum of receipts, in kilograms.
    pub receipts_kg: Decimal,

    /// Sum of bulk issues, packaged issues, and leaker losses, in kilograms.
    pub total_issues_kg: Decimal,

    /// Closing stock total, in kilograms.
    pub closing_stock_kg: Decimal,

    /// Opening stock plus receipts minus issues, in kilograms.
    pub theoretical_stock_kg: Decimal,

    /// Counted closing stock minus theoretical stock, in kilograms.
    pub variance_kg: Decimal,

    /// Sign of the variance.
    pub trend: VarianceTrend,
}

/// Classification of a settlement variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceTrend {
    /// More product counted than the movements account for.
    Surplus,

    /// Less product counted than the movements account for.
    Deficit,

    /// Counted and theoretical stock agree exactly.
    Balanced,
}

/// Settles one day's balance sheet.
///
/// Pure and infallible: any decimal quantities settle to a variance, and the
/// caller is responsible for vetting the entered figures.
#[must_use]
pub fn settle(sheet: &BalanceSheet) -> Settlement {
    let opening_stock_kg = sheet.opening.total();
    let closing_stock_kg = sheet.closing.total();

    let receipts_kg: Decimal = sheet.receipts_kg.iter().copied().sum();
    let total_issues_kg: Decimal = sheet
        .bulk_issues_kg
        .iter()
        .chain(&sheet.packaged_issues_kg)
        .chain(&sheet.leaker_losses_kg)
        .copied()
        .sum();

    let theoretical_stock_kg = opening_stock_kg + receipts_kg - total_issues_kg;
    let variance_kg = closing_stock_kg - theoretical_stock_kg;

    let trend = match variance_kg.cmp(&Decimal::ZERO) {
        Ordering::Greater => VarianceTrend::Surplus,
        Ordering::Less => VarianceTrend::Deficit,
        Ordering::Equal => VarianceTrend::Balanced,
    };

    Settlement {
        opening_stock_kg,
        receipts_kg,
        total_issues_kg,
        closing_stock_kg,
        theoretical_stock_kg,
        variance_kg,
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    fn sheet() -> BalanceSheet {
        BalanceSheet {
            opening: StockCount {
                spheres_kg: dec!(1_418_650),
                cylinders_kg: dec!(36_400),
                reservoirs_kg: dec!(12_000),
            },
            closing: StockCount {
                spheres_kg: dec!(1_364_210),
                cylinders_kg: dec!(41_150),
                reservoirs_kg: dec!(12_000),
            },
            receipts_kg: vec![dec!(25_000), dec!(18_500.5)],
            bulk_issues_kg: vec![dec!(60_000)],
            packaged_issues_kg: vec![dec!(28_750), dec!(4_100.5)],
            leaker_losses_kg: vec![dec!(37.3)],
        }
    }

    #[test]
    fn settles_theoretical_stock_and_variance() {
        let settlement = settle(&sheet());

        assert_eq!(settlement.opening_stock_kg, dec!(1_467_050));
        assert_eq!(settlement.receipts_kg, dec!(43_500.5));
        assert_eq!(settlement.total_issues_kg, dec!(92_887.8));
        assert_eq!(settlement.closing_stock_kg, dec!(1_417_360));
        assert_eq!(settlement.theoretical_stock_kg, dec!(1_417_662.7));
        assert_eq!(settlement.variance_kg, dec!(-302.7));
        assert_eq!(settlement.trend, VarianceTrend::Deficit);
    }

    #[test]
    fn classifies_surplus_and_balanced() {
        let mut surplus = sheet();
        surplus.closing.cylinders_kg = dec!(41_500);
        assert_eq!(settle(&surplus).trend, VarianceTrend::Surplus);

        let mut balanced = sheet();
        balanced.closing.cylinders_kg = dec!(41_452.7);
        let settlement = settle(&balanced);
        assert_eq!(settlement.variance_kg, dec!(0));
        assert_eq!(settlement.trend, VarianceTrend::Balanced);
    }

    #[test]
    fn empty_sheet_settles_to_zero() {
        let settlement = settle(&BalanceSheet::default());

        assert_eq!(settlement.theoretical_stock_kg, dec!(0));
        assert_eq!(settlement.variance_kg, dec!(0));
        assert_eq!(settlement.trend, VarianceTrend::Balanced);
    }
}
