use crate::constants::{PI, TAU};
use crate::models::OrbitalElements;
use crate::physics::kepler;
use nalgebra as na;

/// Propagates one orbiting body along a fixed Keplerian ellipse.
///
/// The engine owns its element set and carries no other state, so an
/// instance can be rebuilt at will and is never shared between bodies. The
/// perifocal-to-reference rotation is composed once here and reused for the
/// instantaneous position, the sampled ellipse and the ellipse center, so
/// the drawn path and the moving body can never disagree.
pub struct OrbitEngine {
    elements: OrbitalElements,
    orientation: na::Rotation3<f64>,
}

impl OrbitEngine {
    /// Rotation order is fixed: inclination about Y, then argument of
    /// periapsis about Z, then ascending-node angle about X.
    pub fn new(elements: OrbitalElements) -> Self {
        let rot_inclination =
            na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), elements.inclination());
        let rot_periapsis = na::Rotation3::from_axis_angle(
            &na::Vector3::z_axis(),
            elements.argument_of_periapsis(),
        );
        let rot_node =
            na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), elements.ascending_node());

        Self {
            orientation: rot_node * rot_periapsis * rot_inclination,
            elements,
        }
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Position at clock time `time`, in the caller's scene units with the
    /// attracting focus at the origin.
    ///
    /// Pure and deterministic for any finite `time`, periodic with the
    /// orbital period. Never fails: if the solver hits its iteration cap the
    /// best available eccentric anomaly is used.
    pub fn position_at(&self, time: f64) -> na::Vector3<f64> {
        let mean_motion = TAU / self.elements.period();
        let mean_anomaly = mean_motion * (time - self.elements.periapsis_epoch());
        let e_anomaly = kepler::solve_eccentric_anomaly(mean_anomaly, self.elements.eccentricity());

        // Perifocal plane, focus at the origin
        let perifocal = na::Vector3::new(
            self.elements.semi_major_axis() * (e_anomaly.cos() - self.elements.eccentricity()),
            self.elements.semi_minor_axis() * e_anomaly.sin(),
            0.0,
        );

        self.orientation * perifocal
    }

    /// Samples the full ellipse for path rendering, using the geometric
    /// parameter `u` over `[-π, π]` (not mean anomalies; the static curve is
    /// time-independent). Points are rotated by the same orientation as
    /// `position_at`.
    pub fn orbit_path(&self, num_points: usize) -> Vec<na::Vector3<f64>> {
        let steps = num_points.max(2);
        let step = TAU / (steps - 1) as f64;

        (0..steps)
            .map(|i| {
                let u = -PI + i as f64 * step;
                let perifocal = na::Vector3::new(
                    self.elements.semi_major_axis() * (u.cos() - self.elements.eccentricity()),
                    self.elements.semi_minor_axis() * u.sin(),
                    0.0,
                );
                self.orientation * perifocal
            })
            .collect()
    }

    /// Geometric center of the ellipse, `(-a*e, 0, 0)` in the perifocal
    /// frame, rotated into the reference frame.
    pub fn ellipse_center(&self) -> na::Vector3<f64> {
        self.orientation * na::Vector3::new(-self.elements.focal_offset(), 0.0, 0.0)
    }
}
