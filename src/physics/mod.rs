pub mod impact;
pub mod kepler;
pub mod propagator;

pub use impact::compute_impact;
pub use propagator::OrbitEngine;
