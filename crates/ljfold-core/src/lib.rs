//! # ljfold
//!
//! Energy minimization of point systems interacting through a pairwise Lennard-Jones
//! potential. Starting from a seeded random configuration in n-dimensional space, each
//! point is moved against the gradient of the total potential energy for a fixed number
//! of iterations with a fixed learning rate.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The point set, the Lennard-Jones potential and its
//!   aggregation into total energy and per-point gradients, and point-set file I/O.
//!
//! - **[`engine`]: The Logic Core.** Validated configuration, seeded initialization, and
//!   the optimizer that updates points one at a time in index order.
//!
//! - **[`workflows`]: The Public API.** Complete runs that return the initial and final
//!   configurations together with every energy reading.

pub mod core;
pub mod engine;
pub mod workflows;
