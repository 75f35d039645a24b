//! # Core Module
//!
//! Stateless building blocks shared by the optimization engine.
//!
//! ## Architecture
//!
//! - **System Representation** ([`models`]) - The point set and its invariants
//! - **Energy Calculations** ([`forcefield`]) - Lennard-Jones parameters, pair potential,
//!   total energy and per-point gradient
//! - **File I/O** ([`io`]) - Loading and saving point sets
//!
//! Nothing in this module holds mutable state between calls; every function is a pure
//! query over the data it is handed.

pub mod forcefield;
pub mod io;
pub mod models;
