use std::{error::Error, fmt, str::FromStr};

#[derive(Debug)]
pub enum ImpactErrors {
    UnsupportedDiameterUnit(String),
    UnsupportedVelocityUnit(String),
    NonPositiveDiameter(f64),
    NonPositiveVelocity(f64),
    NegativePopulationDensity(f64),
    NonFiniteParameter(&'static str),
}

impl fmt::Display for ImpactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactErrors::UnsupportedDiameterUnit(unit) => {
                write!(f, "Unsupported diameter unit '{}'", unit)
            }
            ImpactErrors::UnsupportedVelocityUnit(unit) => {
                write!(f, "Unsupported velocity unit '{}'", unit)
            }
            ImpactErrors::NonPositiveDiameter(d) => {
                write!(f, "Impactor diameter must be positive, got {}", d)
            }
            ImpactErrors::NonPositiveVelocity(v) => {
                write!(f, "Impact velocity must be positive, got {}", v)
            }
            ImpactErrors::NegativePopulationDensity(p) => {
                write!(f, "Population density must be non-negative, got {}", p)
            }
            ImpactErrors::NonFiniteParameter(name) => {
                write!(f, "Impact parameter '{}' is not finite", name)
            }
        }
    }
}

impl Error for ImpactErrors {}

/// Length unit of the impactor diameter as supplied by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiameterUnit {
    Meter,
    Kilometer,
    Foot,
    Mile,
}

impl DiameterUnit {
    /// Multiplier taking a diameter in this unit to meters.
    pub fn to_meters(self) -> f64 {
        match self {
            DiameterUnit::Meter => 1.0,
            DiameterUnit::Kilometer => 1000.0,
            DiameterUnit::Foot => 0.3048,
            DiameterUnit::Mile => 1609.34,
        }
    }
}

impl FromStr for DiameterUnit {
    type Err = ImpactErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(DiameterUnit::Meter),
            "km" => Ok(DiameterUnit::Kilometer),
            "ft" => Ok(DiameterUnit::Foot),
            "miles" => Ok(DiameterUnit::Mile),
            other => Err(ImpactErrors::UnsupportedDiameterUnit(other.to_string())),
        }
    }
}

/// Unit of the impact velocity as supplied by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityUnit {
    KilometersPerSecond,
    MilesPerSecond,
}

impl VelocityUnit {
    /// Multiplier taking a velocity in this unit to m/s.
    pub fn to_meters_per_second(self) -> f64 {
        match self {
            VelocityUnit::KilometersPerSecond => 1000.0,
            VelocityUnit::MilesPerSecond => 1609.34,
        }
    }
}

impl FromStr for VelocityUnit {
    type Err = ImpactErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km/s" => Ok(VelocityUnit::KilometersPerSecond),
            "miles/s" => Ok(VelocityUnit::MilesPerSecond),
            other => Err(ImpactErrors::UnsupportedVelocityUnit(other.to_string())),
        }
    }
}

/// One simulator run's worth of impactor and target parameters.
#[derive(Debug, Clone, Copy)]
pub struct ImpactParameters {
    pub diameter: f64,
    pub diameter_unit: DiameterUnit,
    /// Impactor bulk density (kg/m³). Nominal range 1000 (ice) to 8000
    /// (iron); out-of-range values are accepted as supplied.
    pub density: f64,
    pub velocity: f64,
    pub velocity_unit: VelocityUnit,
    /// Angle from the target surface in degrees: 0 grazing, 90 vertical.
    pub impact_angle_deg: f64,
    /// Water depth at the impact point (m); the UI sends -1 for a land
    /// target, so anything at or below -1 is land and anything above it
    /// counts as water.
    pub water_depth: f64,
    /// People per km² around the impact point.
    pub population_density: f64,
}

impl ImpactParameters {
    pub fn is_water_target(&self) -> bool {
        self.water_depth > -1.0
    }
}

/// Derived impact effects. All values are full-precision; truncation for
/// display is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    pub transient_crater_diameter: f64, // m
    pub transient_crater_depth: f64,    // m
    pub impact_energy: f64,             // J
    pub impact_energy_tnt: f64,         // tons of TNT
    pub impact_energy_megatons: f64,    // megatons of TNT
    pub fireball_diameter: f64,         // m
    pub clothing_ignition_radius: f64,  // m
    pub third_degree_burn_radius: f64,  // m
    pub second_degree_burn_radius: f64, // m
    pub first_degree_burn_radius: f64,  // m
    pub estimated_deaths: f64,
    pub estimated_injuries: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case("m", DiameterUnit::Meter)]
    #[test_case("km", DiameterUnit::Kilometer)]
    #[test_case("ft", DiameterUnit::Foot)]
    #[test_case("miles", DiameterUnit::Mile)]
    fn parses_diameter_units(s: &str, expected: DiameterUnit) {
        assert_eq!(s.parse::<DiameterUnit>().unwrap(), expected);
    }

    #[test_case("km/s", VelocityUnit::KilometersPerSecond)]
    #[test_case("miles/s", VelocityUnit::MilesPerSecond)]
    fn parses_velocity_units(s: &str, expected: VelocityUnit) {
        assert_eq!(s.parse::<VelocityUnit>().unwrap(), expected);
    }

    #[test_case(""; "empty")]
    #[test_case("furlong"; "unknown length")]
    #[test_case("KM"; "wrong case")]
    fn rejects_unknown_diameter_unit(s: &str) {
        let err = s.parse::<DiameterUnit>().unwrap_err();
        assert!(matches!(err, ImpactErrors::UnsupportedDiameterUnit(_)));
        assert!(err.to_string().contains("Unsupported diameter unit"));
    }

    #[test]
    fn rejects_unknown_velocity_unit() {
        let err = "parsec/fortnight".parse::<VelocityUnit>().unwrap_err();
        assert!(matches!(err, ImpactErrors::UnsupportedVelocityUnit(_)));
    }

    #[test]
    fn mile_factor_consistent_across_units() {
        assert_abs_diff_eq!(
            DiameterUnit::Mile.to_meters(),
            VelocityUnit::MilesPerSecond.to_meters_per_second(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn water_target_threshold() {
        let mut params = ImpactParameters {
            diameter: 100.0,
            diameter_unit: DiameterUnit::Meter,
            density: 3000.0,
            velocity: 17.0,
            velocity_unit: VelocityUnit::KilometersPerSecond,
            impact_angle_deg: 45.0,
            water_depth: -1.0,
            population_density: 0.0,
        };
        assert!(!params.is_water_target());
        params.water_depth = -2.0;
        assert!(!params.is_water_target());
        params.water_depth = 50.0;
        assert!(params.is_water_target());
        // The land sentinel is exactly -1; shallower values are water
        params.water_depth = -0.5;
        assert!(params.is_water_target());
        params.water_depth = 0.0;
        assert!(params.is_water_target());
    }
}
