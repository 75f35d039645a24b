//! Reading and writing point sets.
//!
//! The [`traits::PointFile`] trait gives every format the same reader/writer and
//! path-based API. [`csv::CsvFile`] stores one point per line.

pub mod csv;
pub mod traits;
