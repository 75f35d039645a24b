//! Data structures describing the system being minimized.
//!
//! - [`points`] - [`PointSet`](points::PointSet), an ordered, fixed-dimensionality collection
//!   of coordinate vectors owned and mutated in place by the optimizer

pub mod points;
