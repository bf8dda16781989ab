//! Sphere gauging formula chain.

use rust_decimal_macros::dec;

use crate::support::{interpolation, rounding};

use super::{
    BUTANE_GAS_VS_DRY_AIR, CalibrationDataMissing, CalibrationPoint, RATED_MASS_KG,
    SPHERE_CAPACITY_L, STANDARD_ATMOSPHERE_BAR, SphereCalculationResult, SphereInputData, bounds,
};

/// Runs the full gauging chain for one measurement.
///
/// The order of operations and the rounding applied at each step are
/// contractual: combined mass is the sum of the two already-rounded mass
/// components, never a re-rounding of unrounded intermediates.
///
/// # Errors
///
/// Returns [`CalibrationDataMissing`] if the table does not bracket the
/// measured height.
pub(crate) fn calculate(
    input: &SphereInputData,
    table: &[CalibrationPoint],
) -> Result<SphereCalculationResult, CalibrationDataMissing> {
    let bounds = bounds::resolve(table, input.sphere, input.height_mm)?;

    let liquid_volume = interpolation::linear(
        input.height_mm,
        bounds.height_min,
        bounds.height_max,
        bounds.capacity_min,
        bounds.capacity_max,
    );
    let gas_volume = SPHERE_CAPACITY_L - liquid_volume;

    let density = input.density_correction.density_at(input.liquid_temperature_c);

    // The sheet correction carries the whole-number part of the density;
    // only the fractional remainder of d15 × 1000 feeds the working value.
    let mv15 = input.density_d15 * dec!(1000);
    let remainder = mv15 - mv15.floor();
    let liquid_density = rounding::half_up((density + remainder) / dec!(1000), 4);

    let specific_gravity = rounding::half_up(
        input
            .gravity_correction
            .specific_gravity_at(input.gas_temperature_c),
        7,
    );

    let absolute_pressure = input.pressure_barg + STANDARD_ATMOSPHERE_BAR;

    // Reported product mass and the total used downstream are the same
    // product, each rounded on its own.
    let product_mass = rounding::half_up(liquid_volume * liquid_density, 0);
    let total_liquid_mass = rounding::half_up(liquid_volume * liquid_density, 0);
    let total_gas_mass = rounding::half_up(
        gas_volume * specific_gravity * BUTANE_GAS_VS_DRY_AIR * absolute_pressure,
        0,
    );

    let combined_mass = total_liquid_mass + total_gas_mass;
    let ullage = RATED_MASS_KG - combined_mass;

    Ok(SphereCalculationResult {
        product_level_mm: input.height_mm,
        liquid_volume_l: rounding::half_up(liquid_volume, 0),
        gas_volume_l: rounding::half_up(gas_volume, 0),
        liquid_temperature_c: input.liquid_temperature_c,
        liquid_density_kg_l: liquid_density,
        product_mass_kg: product_mass,
        total_liquid_mass_kg: total_liquid_mass,
        total_gas_mass_kg: total_gas_mass,
        combined_mass_kg: combined_mass,
        ullage_kg: ullage,
    })
}
