//! # Workflows Module
//!
//! High-level entry points that tie the [`engine`](crate::engine) and
//! [`core`](crate::core) layers together.
//!
//! - **Minimization Workflow** ([`minimize`]) - Initialize, descend and report, either from
//!   a seeded random draw or from caller-supplied points.

pub mod minimize;
