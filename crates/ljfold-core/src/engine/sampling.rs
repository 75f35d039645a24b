use super::config::InitRange;
use crate::core::models::points::{PointSet, PointSetError};
use nalgebra::DVector;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::instrument;

/// Draws `num_points` points with every coordinate uniform in `range`.
///
/// Coordinates are drawn point by point, dimension by dimension, so a seeded
/// generator always yields the same set. `range` must be a validated,
/// non-empty interval.
#[instrument(level = "debug", skip(rng))]
pub fn sample_uniform_points(
    num_points: usize,
    num_dimensions: usize,
    range: InitRange,
    rng: &mut impl Rng,
) -> Result<PointSet, PointSetError> {
    let coordinate = Uniform::new(range.low, range.high);
    let points = (0..num_points)
        .map(|_| {
            DVector::from_iterator(
                num_dimensions,
                (0..num_dimensions).map(|_| coordinate.sample(rng)),
            )
        })
        .collect();
    PointSet::from_points(num_dimensions, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sampled_points_have_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = sample_uniform_points(6, 4, InitRange::default(), &mut rng).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points.dimensions(), 4);
    }

    #[test]
    fn sampled_coordinates_stay_within_half_open_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let range = InitRange {
            low: -2.5,
            high: 4.0,
        };
        let points = sample_uniform_points(200, 3, range, &mut rng).unwrap();
        assert!(
            points
                .iter()
                .flat_map(|p| p.iter())
                .all(|&c| (-2.5..4.0).contains(&c))
        );
    }

    #[test]
    fn same_seed_yields_identical_points() {
        let a = sample_uniform_points(5, 3, InitRange::default(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = sample_uniform_points(5, 3, InitRange::default(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_yield_different_points() {
        let a = sample_uniform_points(5, 3, InitRange::default(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = sample_uniform_points(5, 3, InitRange::default(), &mut StdRng::seed_from_u64(2))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_dimensions_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = sample_uniform_points(2, 0, InitRange::default(), &mut rng);
        assert_eq!(result, Err(PointSetError::ZeroDimensions));
    }
}
