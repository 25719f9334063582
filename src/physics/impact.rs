use crate::constants::{
    EARTH_SURFACE_GRAVITY, MAX_IMPACT_VELOCITY, MIN_IMPACT_VELOCITY, PI, ROCK_DENSITY,
    TNT_MEGATON_JOULES, TNT_TON_JOULES, WATER_DENSITY,
};
use crate::models::{ImpactErrors, ImpactParameters, ImpactResult};

// Inverse-square thermal radiation model: radius = sqrt(K*E' / (2π*T)) with
// the impact energy pre-scaled by THERMAL_ENERGY_SCALE.
const THERMAL_COUPLING: f64 = 3e-3;
const THERMAL_ENERGY_SCALE: f64 = 1e-7;

// Fluence thresholds, most to least severe (scaled J/m² in the model above)
const CLOTHING_IGNITION_FLUENCE: f64 = 1.0;
const THIRD_DEGREE_BURN_FLUENCE: f64 = 0.42;
const SECOND_DEGREE_BURN_FLUENCE: f64 = 0.25;
const FIRST_DEGREE_BURN_FLUENCE: f64 = 0.13;

const FIREBALL_COEFFICIENT: f64 = 0.002;

// Fraction of people inside a burn circle counted as casualties, and the
// people/km² to people/m² conversion.
const CASUALTY_FRACTION: f64 = 0.5;
const PER_KM2_TO_PER_M2: f64 = 1e-6;

/// Turns impactor and target parameters into crater, energy, thermal and
/// casualty estimates.
///
/// Simplified point-source scaling laws for a demo, not a validated blast
/// model. Pure and synchronous; the population density arrives as a plain
/// number so no lookup happens here.
pub fn compute_impact(params: &ImpactParameters) -> Result<ImpactResult, ImpactErrors> {
    if params.diameter <= 0.0 || !params.diameter.is_finite() {
        return Err(ImpactErrors::NonPositiveDiameter(params.diameter));
    }
    if params.velocity <= 0.0 || !params.velocity.is_finite() {
        return Err(ImpactErrors::NonPositiveVelocity(params.velocity));
    }
    if params.population_density < 0.0 || !params.population_density.is_finite() {
        return Err(ImpactErrors::NegativePopulationDensity(
            params.population_density,
        ));
    }
    // NaN would slip through both clamps below and poison every output
    if !params.density.is_finite() {
        return Err(ImpactErrors::NonFiniteParameter("density"));
    }
    if !params.impact_angle_deg.is_finite() {
        return Err(ImpactErrors::NonFiniteParameter("impact_angle_deg"));
    }

    let diameter = params.diameter * params.diameter_unit.to_meters();
    let velocity = (params.velocity * params.velocity_unit.to_meters_per_second())
        .clamp(MIN_IMPACT_VELOCITY, MAX_IMPACT_VELOCITY);
    // Angles above vertical are meaningless; below grazing would NaN the
    // crater law through a negative sine.
    let angle_deg = params.impact_angle_deg.clamp(0.0, 90.0);

    let target_density = if params.is_water_target() {
        WATER_DENSITY
    } else {
        ROCK_DENSITY
    };

    // ½·m·v² for a sphere of this diameter
    let impact_energy = PI / 12.0 * params.density * diameter.powi(3) * velocity * velocity;
    let impact_energy_tnt = impact_energy / TNT_TON_JOULES;
    let impact_energy_megatons = impact_energy / TNT_MEGATON_JOULES;

    let fireball_diameter = FIREBALL_COEFFICIENT * impact_energy.cbrt();

    let thermal_energy = impact_energy * THERMAL_ENERGY_SCALE;
    let clothing_ignition_radius = thermal_radius(thermal_energy, CLOTHING_IGNITION_FLUENCE);
    let third_degree_burn_radius = thermal_radius(thermal_energy, THIRD_DEGREE_BURN_FLUENCE);
    let second_degree_burn_radius = thermal_radius(thermal_energy, SECOND_DEGREE_BURN_FLUENCE);
    let first_degree_burn_radius = thermal_radius(thermal_energy, FIRST_DEGREE_BURN_FLUENCE);

    // Deaths from the most severe circle, injuries from the least severe
    let density_per_m2 = params.population_density * PER_KM2_TO_PER_M2;
    let estimated_deaths =
        clothing_ignition_radius.powi(2) * PI * CASUALTY_FRACTION * density_per_m2;
    let estimated_injuries =
        first_degree_burn_radius.powi(2) * PI * CASUALTY_FRACTION * density_per_m2;

    // Point-source transient crater scaling law
    let transient_crater_diameter = 1.161
        * (params.density / target_density).cbrt()
        * diameter.powf(0.78)
        * velocity.powf(0.44)
        * EARTH_SURFACE_GRAVITY.powf(-0.22)
        * angle_deg.to_radians().sin().cbrt();
    let transient_crater_depth = transient_crater_diameter / 8.0_f64.sqrt();

    Ok(ImpactResult {
        transient_crater_diameter,
        transient_crater_depth,
        impact_energy,
        impact_energy_tnt,
        impact_energy_megatons,
        fireball_diameter,
        clothing_ignition_radius,
        third_degree_burn_radius,
        second_degree_burn_radius,
        first_degree_burn_radius,
        estimated_deaths,
        estimated_injuries,
    })
}

/// Radius at which the scaled impact energy drops to a fluence threshold,
/// assuming hemispherical inverse-square falloff.
fn thermal_radius(scaled_energy: f64, fluence_threshold: f64) -> f64 {
    (THERMAL_COUPLING * scaled_energy / (2.0 * PI * fluence_threshold)).sqrt()
}
