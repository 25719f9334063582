//! Network-backed population density estimates.
//!
//! This is the external collaborator of the impact calculator: the core
//! never calls it, it only consumes the resulting number, so simulations
//! stay testable without network access.

mod density_manager;
pub mod population_errors;

use density_manager::DensityManager;
use lazy_static::lazy_static;
use std::sync::Mutex;

pub use population_errors::PopulationErrors;

lazy_static! {
    static ref DENSITY_MANAGER: Mutex<DensityManager> = Mutex::new(DensityManager::new());
}

/// People per km² around a geographic coordinate, or an explicit error when
/// the estimate is unavailable (never a silent zero).
pub fn population_density(latitude: f64, longitude: f64) -> Result<f64, PopulationErrors> {
    let mut manager = DENSITY_MANAGER.lock().unwrap();
    manager.density_at(latitude, longitude)
}

/// Same lookup keyed directly by an ISO country code, bypassing the
/// reverse-geocoding step.
pub fn population_density_for_country(country_code: &str) -> Result<f64, PopulationErrors> {
    let mut manager = DENSITY_MANAGER.lock().unwrap();
    manager.country_density(country_code)
}
