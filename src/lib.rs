//! Numerical core of an asteroid-risk visualization: Keplerian orbit
//! propagation for scene bodies and simplified impact-effect estimates.
//! Rendering, scenes and audio live elsewhere and talk to this crate
//! through plain numeric values.

pub mod catalog;
pub mod constants;
pub mod models;
pub mod physics;
pub mod population;

pub use catalog::{parse_catalog, CatalogBody};
pub use models::{
    DiameterUnit, ImpactParameters, ImpactResult, OrbitalElements, VelocityUnit,
};
pub use physics::{compute_impact, OrbitEngine};
