//! Kepler's equation `M = E - e*sin(E)` and its iterative inverse.

use crate::constants::TAU;

/// Convergence threshold on successive eccentric-anomaly iterates (rad).
const TOLERANCE: f64 = 1e-14;
/// Hard cap guaranteeing termination. Eccentricities below 0.95 converge in
/// well under 10 iterations; hitting the cap yields the best available value
/// rather than an error, since a sub-tolerance positional error is invisible
/// at rendering scale.
const MAX_ITERATIONS: usize = 100;

/// Reduces a mean anomaly into `[0, 2π)`. The starter series below assumes
/// this range, so every solve goes through this reduction first.
pub fn reduce_mean_anomaly(mean_anomaly: f64) -> f64 {
    mean_anomaly.rem_euclid(TAU)
}

/// Third-order series starter for the eccentric anomaly, valid for small to
/// moderate eccentricity. A poor seed only costs iterations, never
/// correctness.
fn starter(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let e2 = eccentricity * eccentricity;
    let e3 = eccentricity * e2;
    let cos_m = mean_anomaly.cos();
    mean_anomaly
        + (-0.5 * e3 + eccentricity + (e2 + 1.5 * cos_m * e3) * cos_m) * mean_anomaly.sin()
}

/// Third-order (cubically convergent) Newton correction for one iterate.
/// Plain first-order Newton would also converge, just slower.
fn third_order_correction(mean_anomaly: f64, e_anomaly: f64, eccentricity: f64) -> f64 {
    let cos_e = e_anomaly.cos();
    let f_prime = -1.0 + eccentricity * cos_e;
    let sin_term = eccentricity * e_anomaly.sin();
    let residual = -e_anomaly + sin_term + mean_anomaly;
    let second = residual / (0.5 * residual * sin_term / f_prime + f_prime);
    residual
        / ((0.5 * e_anomaly.sin() - (1.0 / 6.0) * cos_e * second) * eccentricity * second + f_prime)
}

/// Solves Kepler's equation for the eccentric anomaly.
///
/// The mean anomaly may be any finite value; it is reduced into `[0, 2π)`
/// before solving. For `0 <= e < 1` the returned `E` satisfies
/// `|E - e*sin(E) - M| < 1e-8` comfortably.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let m = reduce_mean_anomaly(mean_anomaly);
    let mut e_anomaly = starter(m, eccentricity);

    for _ in 0..MAX_ITERATIONS {
        let next = e_anomaly - third_order_correction(m, e_anomaly, eccentricity);
        let delta = (next - e_anomaly).abs();
        e_anomaly = next;
        if delta < TOLERANCE {
            break;
        }
    }

    e_anomaly
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    fn kepler_residual(e_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
        (e_anomaly - eccentricity * e_anomaly.sin() - reduce_mean_anomaly(mean_anomaly)).abs()
    }

    #[test]
    fn circular_orbit_returns_mean_anomaly() {
        for m in [0.0, 0.5, 1.0, 2.0, 3.0, 5.0, 6.2] {
            assert_abs_diff_eq!(solve_eccentric_anomaly(m, 0.0), m, epsilon = 1e-12);
        }
    }

    #[test]
    fn residual_bounded_over_eccentricity_grid() {
        // |E - e*sin(E) - M| must stay below 1e-8 across e in [0, 0.9]
        let mut e = 0.0;
        while e <= 0.9 {
            let mut m = 0.0;
            while m < TAU {
                let e_anom = solve_eccentric_anomaly(m, e);
                assert!(
                    kepler_residual(e_anom, e, m) < 1e-8,
                    "residual too large for e={}, M={}",
                    e,
                    m
                );
                m += 0.1;
            }
            e += 0.05;
        }
    }

    #[test_case(-1.0; "negative")]
    #[test_case(7.0; "beyond one turn")]
    #[test_case(-123.456; "many negative turns")]
    #[test_case(1e6; "many positive turns")]
    fn mean_anomaly_reduction(m: f64) {
        let reduced = reduce_mean_anomaly(m);
        assert!((0.0..TAU).contains(&reduced));
        // Reduction changes M by a whole number of turns
        let turns = (m - reduced) / TAU;
        assert_abs_diff_eq!(turns, turns.round(), epsilon = 1e-9);
    }

    #[test]
    fn solver_is_periodic_in_mean_anomaly() {
        let e = 0.65;
        for m in [0.1, 1.3, 4.0] {
            assert_abs_diff_eq!(
                solve_eccentric_anomaly(m, e),
                solve_eccentric_anomaly(m + TAU, e),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn high_eccentricity_still_converges() {
        // Above the 0.9 grid but inside the supported range
        for m in [0.001, 0.1, 1.0, 3.14, 6.0] {
            let e_anom = solve_eccentric_anomaly(m, 0.94);
            assert!(kepler_residual(e_anom, 0.94, m) < 1e-8);
        }
    }
}
