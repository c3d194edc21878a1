//! meanfilter-filter - Mean (box) filtering of square grids
//!
//! This crate provides:
//!
//! - Zero border extension ([`extend_grid`])
//! - Window extent estimation at the grid border ([`window_extent`])
//! - The O(N²) sliding-sum mean filter ([`fast_mean_filter`]) and a
//!   direct O(N²·h²) reference ([`mean_filter_direct`])
//!
//! Signed front-ends ([`extend_rows`], [`estimate_extent`],
//! [`mean_filter_rows`]) accept nested rows and `i64` parameters and
//! validate them before filtering.

pub mod border;
mod error;
pub mod extent;
pub mod mean;

pub use error::{FilterError, FilterResult};

pub use border::{extend_grid, extend_rows};
pub use extent::{estimate_extent, validate_half_width, window_extent, window_extents};
pub use mean::{
    MAX_DECIMALS, MeanFilterOptions, Rounding, fast_mean_filter, fast_mean_filter_with,
    mean_filter_direct, mean_filter_rows,
};
