//! meanfilter-core - Basic data structures for mean filtering
//!
//! This crate provides the data structure shared by every other
//! meanfilter crate:
//!
//! - [`Grid`] - Square `f64` array (row-major, no padding)
//! - [`Error`] / [`Result`] - Core error handling

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::Grid;
