pub mod elements;
pub mod impact;

pub use elements::{ElementsError, OrbitalElements};
pub use impact::{DiameterUnit, ImpactErrors, ImpactParameters, ImpactResult, VelocityUnit};
