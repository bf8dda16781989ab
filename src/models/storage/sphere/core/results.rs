//! Result type for one sphere gauging calculation.

use rust_decimal::Decimal;

/// Inventory figures for one sphere measurement.
///
/// Masses are reported as whole kilograms and the liquid density to four
/// decimal places; the rounding happens inside the calculation at fixed
/// steps, so these fields carry the exact reported values, not re-rounded
/// intermediates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCalculationResult {
    /// Measured product level, in millimeters, as entered.
    pub product_level_mm: Decimal,

    /// Liquid volume, in liters, rounded to the liter.
    pub liquid_volume_l: Decimal,

    /// Gas volume, in liters, rounded to the liter.
    pub gas_volume_l: Decimal,

    /// Liquid phase temperature, in °C, as entered.
    pub liquid_temperature_c: Decimal,

    /// Liquid density used for the mass conversion, in kg/L, at four
    /// decimal places.
    pub liquid_density_kg_l: Decimal,

    /// Mass of the liquid product, in kilograms.
    pub product_mass_kg: Decimal,

    /// Total liquid mass, in kilograms. Rounded independently of
    /// [`product_mass_kg`](Self::product_mass_kg) even though both come from
    /// the same product.
    pub total_liquid_mass_kg: Decimal,

    /// Total gas mass, in kilograms.
    pub total_gas_mass_kg: Decimal,

    /// Combined liquid and gas mass, in kilograms. Always the sum of the two
    /// already-rounded mass fields.
    pub combined_mass_kg: Decimal,

    /// Ullage ("creux"): mass headroom to the sphere's rated mass, in
    /// kilograms.
    pub ullage_kg: Decimal,
}
