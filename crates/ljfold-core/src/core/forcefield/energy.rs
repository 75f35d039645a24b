use super::params::LennardJonesParams;
use super::potentials;
use crate::core::models::points::{Point, PointSet};
use itertools::Itertools;
use nalgebra::DVector;
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Error, PartialEq)]
pub enum EnergyError {
    #[error("Points {first} and {second} coincide; the pair potential is undefined at zero separation")]
    CoincidentPoints { first: usize, second: usize },
    #[error("Point index {index} is out of bounds for a set of {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[inline]
fn separation(points: &PointSet, a: usize, b: usize) -> Result<f64, EnergyError> {
    let dist = points.distance(a, b);
    if dist == 0.0 {
        return Err(EnergyError::CoincidentPoints {
            first: a.min(b),
            second: a.max(b),
        });
    }
    Ok(dist)
}

/// Total Lennard-Jones energy summed over all unordered pairs `i < j`.
pub fn total_energy(points: &PointSet, params: &LennardJonesParams) -> Result<f64, EnergyError> {
    let pairs: Vec<(usize, usize)> = (0..points.len()).tuple_combinations().collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = pairs.par_iter();

    // Pair energies are accumulated in pair order so the sum is bit-identical
    // with and without the parallel feature.
    let pair_energies: Vec<f64> = iterator
        .map(|&(i, j)| {
            separation(points, i, j).map(|dist| potentials::lennard_jones_12_6(dist, params))
        })
        .collect::<Result<_, _>>()?;

    Ok(pair_energies.iter().sum())
}

/// Gradient of the total energy with respect to the coordinates of point `index`.
///
/// Each neighbor contributes its radial term times the raw coordinate delta
/// `points[index] - points[i]`. The delta is not normalized to a unit vector.
pub fn gradient_at(
    index: usize,
    points: &PointSet,
    params: &LennardJonesParams,
) -> Result<Point, EnergyError> {
    if index >= points.len() {
        return Err(EnergyError::IndexOutOfBounds {
            index,
            len: points.len(),
        });
    }

    let target = &points.points()[index];
    let mut gradient = DVector::zeros(points.dimensions());
    for (i, other) in points.iter().enumerate() {
        if i == index {
            continue;
        }
        let dist = separation(points, index, i)?;
        let radial = potentials::lennard_jones_12_6_gradient(dist, params);
        for k in 0..points.dimensions() {
            gradient[k] += radial * (target[k] - other[k]);
        }
    }
    Ok(gradient)
}
