use std::{error::Error, fmt};

#[derive(Debug)]
pub enum ElementsError {
    NonPositiveSemiMajorAxis(f64),
    EccentricityOutOfRange(f64),
    NonPositivePeriod(f64),
    NonFiniteElement(&'static str),
}

impl fmt::Display for ElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementsError::NonPositiveSemiMajorAxis(a) => {
                write!(f, "Semi-major axis must be positive, got {}", a)
            }
            ElementsError::EccentricityOutOfRange(e) => {
                write!(f, "Eccentricity must be in [0, 1), got {}", e)
            }
            ElementsError::NonPositivePeriod(p) => {
                write!(f, "Orbital period must be positive, got {}", p)
            }
            ElementsError::NonFiniteElement(name) => {
                write!(f, "Orbital element '{}' is not finite", name)
            }
        }
    }
}

impl Error for ElementsError {}

/// Keplerian elements of a closed orbit, validated at construction.
///
/// Units are the caller's: one length unit for the semi-major axis, one time
/// unit for the period and periapsis epoch, angles in radians. All bodies in
/// a scene must share the same units.
///
/// The element set is immutable for the life of the value; the derived
/// semi-minor axis and focal offset are computed once from the independent
/// elements and can never drift from them.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: f64,
    argument_of_periapsis: f64,
    ascending_node: f64,
    period: f64,
    periapsis_epoch: f64,
    // Derived once in `new`
    semi_minor_axis: f64,
    focal_offset: f64,
}

impl OrbitalElements {
    /// Validates and builds an element set.
    ///
    /// Rejects non-finite values, `semi_major_axis <= 0`, eccentricity
    /// outside `[0, 1)` (parabolic/hyperbolic orbits are out of contract)
    /// and `period <= 0`, so downstream propagation can never produce NaN.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        argument_of_periapsis: f64,
        ascending_node: f64,
        period: f64,
        periapsis_epoch: f64,
    ) -> Result<Self, ElementsError> {
        for (value, name) in [
            (semi_major_axis, "semi_major_axis"),
            (eccentricity, "eccentricity"),
            (inclination, "inclination"),
            (argument_of_periapsis, "argument_of_periapsis"),
            (ascending_node, "ascending_node"),
            (period, "period"),
            (periapsis_epoch, "periapsis_epoch"),
        ] {
            if !value.is_finite() {
                return Err(ElementsError::NonFiniteElement(name));
            }
        }

        if semi_major_axis <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(eccentricity));
        }
        if period <= 0.0 {
            return Err(ElementsError::NonPositivePeriod(period));
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination,
            argument_of_periapsis,
            ascending_node,
            period,
            periapsis_epoch,
            semi_minor_axis: semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt(),
            focal_offset: eccentricity * semi_major_axis,
        })
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn argument_of_periapsis(&self) -> f64 {
        self.argument_of_periapsis
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn periapsis_epoch(&self) -> f64 {
        self.periapsis_epoch
    }

    /// Semi-minor axis `a * sqrt(1 - e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// Distance from ellipse center to the occupied focus, `a * e`.
    pub fn focal_offset(&self) -> f64 {
        self.focal_offset
    }

    /// Closest-approach distance `a * (1 - e)`.
    pub fn periapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Farthest distance `a * (1 + e)`.
    pub fn apoapsis_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test]
    fn derived_quantities() {
        let elements = OrbitalElements::new(10.0, 0.6, 0.0, 0.0, 0.0, 100.0, 0.0).unwrap();
        assert_abs_diff_eq!(elements.semi_minor_axis(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elements.focal_offset(), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elements.periapsis_distance(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elements.apoapsis_distance(), 16.0, epsilon = 1e-12);
    }

    #[test_case(-1.0, 0.5, 120.0; "negative semi-major axis")]
    #[test_case(0.0, 0.5, 120.0; "zero semi-major axis")]
    #[test_case(1.0, 1.0, 120.0; "parabolic eccentricity")]
    #[test_case(1.0, 1.5, 120.0; "hyperbolic eccentricity")]
    #[test_case(1.0, -0.1, 120.0; "negative eccentricity")]
    #[test_case(1.0, 0.5, 0.0; "zero period")]
    #[test_case(1.0, 0.5, -3.0; "negative period")]
    #[test_case(f64::NAN, 0.5, 120.0; "nan semi-major axis")]
    #[test_case(1.0, 0.5, f64::INFINITY; "infinite period")]
    fn rejects_out_of_domain(a: f64, e: f64, period: f64) {
        assert!(OrbitalElements::new(a, e, 0.0, 0.0, 0.0, period, 0.0).is_err());
    }

    #[test]
    fn circular_orbit_is_valid() {
        let elements = OrbitalElements::new(1.0, 0.0, 0.3, 1.0, 2.0, 365.25, -10.0).unwrap();
        assert_abs_diff_eq!(elements.semi_minor_axis(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(elements.focal_offset(), 0.0, epsilon = 1e-12);
    }
}
