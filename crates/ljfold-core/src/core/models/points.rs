use nalgebra::DVector;
use thiserror::Error;

pub type Point = DVector<f64>;

#[derive(Debug, Error, PartialEq)]
pub enum PointSetError {
    #[error("Point set dimensionality must be at least 1")]
    ZeroDimensions,
    #[error("Point {index} has {found} coordinates, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// An ordered, fixed-dimensionality collection of points.
///
/// The number of points and the dimensionality never change after
/// construction; coordinates are only mutated through [`PointSet::displace`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dimensions: usize,
    points: Vec<Point>,
}

impl PointSet {
    pub fn from_points(dimensions: usize, points: Vec<Point>) -> Result<Self, PointSetError> {
        if dimensions == 0 {
            return Err(PointSetError::ZeroDimensions);
        }
        for (index, point) in points.iter().enumerate() {
            if point.len() != dimensions {
                return Err(PointSetError::DimensionMismatch {
                    index,
                    expected: dimensions,
                    found: point.len(),
                });
            }
            if point.iter().any(|c| !c.is_finite()) {
                return Err(PointSetError::NonFiniteCoordinate { index });
            }
        }
        Ok(Self { dimensions, points })
    }

    /// Builds a set from row-major coordinate rows, taking the dimensionality
    /// from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, PointSetError> {
        let dimensions = rows.first().map_or(0, Vec::len);
        let points = rows.into_iter().map(DVector::from_vec).collect();
        Self::from_points(dimensions, points)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        (&self.points[a] - &self.points[b]).norm()
    }

    /// Moves point `index` by `scale * direction`, in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or `direction` has the wrong length.
    #[inline]
    pub fn displace(&mut self, index: usize, direction: &Point, scale: f64) {
        assert_eq!(direction.len(), self.dimensions);
        self.points[index].axpy(scale, direction, 1.0);
    }

    /// Returns the first pair `(i, j)` with `i < j` whose coordinates are identical.
    pub fn find_coincident_pair(&self) -> Option<(usize, usize)> {
        (0..self.len()).find_map(|i| {
            ((i + 1)..self.len())
                .find(|&j| self.points[i] == self.points[j])
                .map(|j| (i, j))
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.iter().copied().collect()).collect()
    }
}
