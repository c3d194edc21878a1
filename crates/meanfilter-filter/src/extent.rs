//! Window extent estimation
//!
//! Counts how many in-bounds cells a window of half-width `h` covers along
//! one axis. The mean filter divides its zero-padded window sums by the
//! product of the row and column extents, which turns the padded sum into
//! the exact mean of the cells that really exist.
//!
//! The axis spans `[0, n)`. For a window centered at `coord`:
//!
//! 1. `coord <= h`: clipped on the near side, `coord + h + 1` cells
//!    (further clipped to `n` when the window also runs off the far side)
//! 2. `coord + h + 1 < n`: not clipped, `2h + 1` cells
//! 3. otherwise: clipped on the far side, `n + h - coord` cells

use crate::{FilterError, FilterResult};

/// Number of in-bounds cells covered by a window centered at `coord`.
///
/// Returns 0 when `n == 0` or when the window does not reach the axis at
/// all. The result never exceeds `n` or `2h + 1`.
///
/// # Examples
///
/// ```
/// use meanfilter_filter::window_extent;
///
/// assert_eq!(window_extent(0, 10, 2), 3);
/// assert_eq!(window_extent(5, 10, 2), 5);
/// assert_eq!(window_extent(9, 10, 2), 3);
/// // Window wider than the axis
/// assert_eq!(window_extent(1, 3, 5), 3);
/// ```
pub fn window_extent(coord: usize, n: usize, h: usize) -> usize {
    if n == 0 {
        return 0;
    }
    if coord <= h {
        coord.saturating_add(h).saturating_add(1).min(n)
    } else if coord.saturating_add(h) < n - 1 {
        2 * h + 1
    } else {
        n.saturating_add(h).saturating_sub(coord)
    }
}

/// Extents for every coordinate in `[0, n)`.
///
/// The mean filter calls this once per axis so that the per-cell work
/// is a single multiplication.
pub fn window_extents(n: usize, h: usize) -> Vec<usize> {
    (0..n).map(|coord| window_extent(coord, n, h)).collect()
}

/// Window extent without clipping to the axis length.
///
/// Same three regimes as [`window_extent`], but the near-side count
/// `coord + h + 1` is not capped at `n`, and the far-side count
/// `n + h - coord` may exceed `n`. The two agree whenever `n >= 2h + 1`.
/// Legacy-compatible rounding divides by these counts.
pub(crate) fn unclamped_window_extent(coord: usize, n: usize, h: usize) -> usize {
    if coord <= h {
        coord.saturating_add(h).saturating_add(1)
    } else if coord.saturating_add(h).saturating_add(1) < n {
        2 * h + 1
    } else {
        n.saturating_add(h).saturating_sub(coord)
    }
}

/// Unclamped extents for every coordinate in `[0, n)`.
pub(crate) fn unclamped_window_extents(n: usize, h: usize) -> Vec<usize> {
    (0..n)
        .map(|coord| unclamped_window_extent(coord, n, h))
        .collect()
}

/// Convert a signed half-width into `usize`, rejecting negative values.
///
/// # Errors
///
/// Returns `FilterError::InvalidHalfWidth` if `h < 0`.
pub fn validate_half_width(h: i64) -> FilterResult<usize> {
    usize::try_from(h).map_err(|_| FilterError::InvalidHalfWidth(h))
}

/// Signed front-end to [`window_extent`].
///
/// # Errors
///
/// Returns `FilterError::InvalidHalfWidth` if `h < 0`, or
/// `FilterError::InvalidParameters` if `coord` or `n` is negative.
pub fn estimate_extent(coord: i64, n: i64, h: i64) -> FilterResult<usize> {
    let h = validate_half_width(h)?;
    let coord = usize::try_from(coord).map_err(|_| {
        FilterError::InvalidParameters(format!("coordinate must be >= 0, got {coord}"))
    })?;
    let n = usize::try_from(n)
        .map_err(|_| FilterError::InvalidParameters(format!("size must be >= 0, got {n}")))?;
    Ok(window_extent(coord, n, h))
}
