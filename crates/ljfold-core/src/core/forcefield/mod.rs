//! # Force Field Module
//!
//! Pairwise Lennard-Jones 12-6 interactions between points in n-dimensional space.
//!
//! ## Key Components
//!
//! - [`params`] - The `(epsilon, sigma)` pair shared by every evaluation, with TOML loading
//! - [`potentials`] - Pure pair functions: the 12-6 energy and its radial gradient term
//! - [`energy`] - Aggregation over a [`PointSet`](crate::core::models::points::PointSet):
//!   total energy and the per-point gradient
//!
//! ## Usage
//!
//! ```ignore
//! use ljfold::core::forcefield::{energy, params::LennardJonesParams};
//!
//! let params = LennardJonesParams::default();
//! let e = energy::total_energy(&points, &params)?;
//! let g = energy::gradient_at(0, &points, &params)?;
//! ```
//!
//! ## Gradient Convention
//!
//! The per-point gradient multiplies the radial term by the raw coordinate delta
//! between the two points, without dividing by the separation again. Descent
//! trajectories depend on this convention.

pub mod energy;
pub mod params;
pub mod potentials;
