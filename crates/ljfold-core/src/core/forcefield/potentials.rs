use super::params::LennardJonesParams;

#[inline]
pub fn lennard_jones_12_6(dist: f64, params: &LennardJonesParams) -> f64 {
    let rho = params.sigma / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    4.0 * params.epsilon * (rho12 - rho6)
}

/// Radial term used to build the per-point gradient.
///
/// Equals `dV/dr / r`, so multiplying it by a raw coordinate delta yields the
/// Cartesian gradient component. Callers guarantee `dist > 0`.
#[inline]
pub fn lennard_jones_12_6_gradient(dist: f64, params: &LennardJonesParams) -> f64 {
    let sigma6 = params.sigma.powi(6);
    let sigma12 = sigma6 * sigma6;
    24.0 * params.epsilon * (sigma6 / dist.powi(8) - 2.0 * sigma12 / dist.powi(14))
}

#[inline]
pub fn equilibrium_distance(params: &LennardJonesParams) -> f64 {
    params.sigma * 2f64.powf(1.0 / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn argon_like() -> LennardJonesParams {
        LennardJonesParams {
            epsilon: 0.238,
            sigma: 3.4,
        }
    }

    #[test]
    fn lennard_jones_is_exactly_zero_at_sigma() {
        let unit = LennardJonesParams::default();
        assert_eq!(lennard_jones_12_6(1.0, &unit), 0.0);

        let params = LennardJonesParams {
            epsilon: 2.5,
            sigma: 2.0,
        };
        assert_eq!(lennard_jones_12_6(2.0, &params), 0.0);
    }

    #[test]
    fn lennard_jones_at_equilibrium_distance_returns_negative_epsilon() {
        let params = argon_like();
        let energy = lennard_jones_12_6(equilibrium_distance(&params), &params);
        assert!(f64_approx_equal(energy, -params.epsilon));
    }

    #[test]
    fn lennard_jones_gradient_vanishes_at_equilibrium_distance() {
        let params = argon_like();
        let gradient = lennard_jones_12_6_gradient(equilibrium_distance(&params), &params);
        assert!(gradient.abs() < 1e-12);
    }

    #[test]
    fn lennard_jones_increases_monotonically_beyond_minimum() {
        let params = LennardJonesParams::default();
        let r_min = equilibrium_distance(&params);
        let distances: Vec<f64> = (1..200).map(|i| r_min + 0.05 * i as f64).collect();
        for pair in distances.windows(2) {
            assert!(
                lennard_jones_12_6(pair[0], &params) < lennard_jones_12_6(pair[1], &params),
                "energy should rise from r={} to r={}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn lennard_jones_is_repulsive_inside_sigma_and_attractive_outside() {
        let params = LennardJonesParams::default();
        assert!(lennard_jones_12_6(0.9, &params) > 0.0);
        assert!(lennard_jones_12_6(1.5, &params) < 0.0);
    }

    #[test]
    fn lennard_jones_diverges_at_small_distance_and_vanishes_far_away() {
        let params = LennardJonesParams::default();
        assert!(lennard_jones_12_6(0.1, &params) > 1e11);
        assert!(lennard_jones_12_6(100.0, &params).abs() < 1e-11);
    }

    #[test]
    fn lennard_jones_gradient_sign_matches_force_direction() {
        let params = LennardJonesParams::default();
        assert!(lennard_jones_12_6_gradient(0.95, &params) < 0.0);
        assert!(lennard_jones_12_6_gradient(1.5, &params) > 0.0);
    }

    #[test]
    fn lennard_jones_gradient_matches_finite_difference_of_energy() {
        let params = argon_like();
        let h = 1e-6;
        for &r in &[3.2, 3.8, 4.5, 6.0] {
            let numeric = (lennard_jones_12_6(r + h, &params) - lennard_jones_12_6(r - h, &params))
                / (2.0 * h);
            let analytic = lennard_jones_12_6_gradient(r, &params) * r;
            assert!(
                (numeric - analytic).abs() < 1e-6 * analytic.abs().max(1.0),
                "r={}: numeric {} vs analytic {}",
                r,
                numeric,
                analytic
            );
        }
    }

    #[test]
    fn lennard_jones_gradient_at_unit_parameters_matches_closed_form() {
        let params = LennardJonesParams::default();
        let expected = 24.0 * (1.0 / 2f64.powi(8) - 2.0 / 2f64.powi(14));
        assert!(f64_approx_equal(
            lennard_jones_12_6_gradient(2.0, &params),
            expected
        ));
    }
}
