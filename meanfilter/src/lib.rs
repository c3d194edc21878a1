//! meanfilter - Fast mean (box) filtering of square grids
//!
//! Computes, for every cell of an N×N grid, the mean of the cells within a
//! square window of half-width `h`, in O(N²) time independent of `h`.
//! Cells near the border average only the neighbors that exist.
//!
//! # Example
//!
//! ```
//! use meanfilter::Grid;
//! use meanfilter::filter::fast_mean_filter;
//!
//! let grid = Grid::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ])
//! .unwrap();
//!
//! let smoothed = fast_mean_filter(&grid, 1).unwrap();
//! assert_eq!(smoothed.get(1, 1).unwrap(), 5.0);
//! assert_eq!(smoothed.get(0, 0).unwrap(), 3.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use meanfilter_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use meanfilter_filter as filter;
