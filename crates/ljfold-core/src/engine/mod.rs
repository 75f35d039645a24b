//! # Engine Module
//!
//! The stateful layer: configuration, starting-point generation and the
//! gradient-descent optimizer that mutates a point set in place.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated run parameters and their builder
//! - **Initialization** ([`sampling`]) - Seeded uniform draw of starting coordinates
//! - **Descent** ([`optimizer`]) - Sequential per-point updates with periodic energy reports
//! - **Progress Monitoring** ([`progress`]) - Callback-based event reporting
//! - **Results** ([`state`]) - Energy readings collected during a run
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping lower layers

pub mod config;
pub mod error;
pub mod optimizer;
pub mod progress;
pub mod sampling;
pub mod state;
