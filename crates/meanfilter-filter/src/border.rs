//! Zero border extension
//!
//! Pads a grid with `h` rows and columns of zeros on every side so the
//! sliding window never indexes outside its buffer. Zeros add nothing to a
//! window sum; the mean filter corrects the divisor with
//! [`window_extent`](crate::window_extent).

use crate::extent::validate_half_width;
use crate::{FilterError, FilterResult};
use meanfilter_core::{Error, Grid};

/// Side length of a grid of size `n` after adding `h` cells on each side.
pub(crate) fn extended_size(n: usize, h: usize) -> FilterResult<usize> {
    h.checked_mul(2)
        .and_then(|pad| pad.checked_add(n))
        .ok_or_else(|| {
            FilterError::InvalidParameters(format!(
                "half-width {h} is too large for a {n}x{n} grid"
            ))
        })
}

/// Copy `grid` into the center of a zero grid of size `N + 2h`.
///
/// The interior `[h, h + N)` in both directions holds the input; every
/// other cell is zero. The input is never aliased.
///
/// An empty input gives an empty output regardless of `h`.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if the padded grid cannot be
/// represented or allocated.
///
/// # Examples
///
/// ```
/// use meanfilter_core::Grid;
/// use meanfilter_filter::extend_grid;
///
/// let grid = Grid::new_with_value(2, 1.0).unwrap();
/// let ext = extend_grid(&grid, 1).unwrap();
/// assert_eq!(ext.size(), 4);
/// assert_eq!(ext.get(0, 0).unwrap(), 0.0);
/// assert_eq!(ext.get(1, 1).unwrap(), 1.0);
/// assert_eq!(ext.sum(), 4.0);
/// ```
pub fn extend_grid(grid: &Grid, h: usize) -> FilterResult<Grid> {
    let n = grid.size();
    if n == 0 {
        return Ok(Grid::new(0)?);
    }

    let size = extended_size(n, h)?;
    let mut extended = Grid::new(size).map_err(|e| match e {
        Error::InvalidDimension { .. } => FilterError::InvalidParameters(format!(
            "half-width {h} pads a {n}x{n} grid to {size}x{size}, too large to allocate"
        )),
        other => other.into(),
    })?;
    for (row, src) in grid.rows().enumerate() {
        extended.row_mut(row + h)[h..h + n].copy_from_slice(src);
    }

    log::trace!("extended {n}x{n} grid to {size}x{size} (h = {h})");
    Ok(extended)
}

/// Nested-row front-end to [`extend_grid`].
///
/// # Errors
///
/// Returns `FilterError::Core` if the rows are not square, or
/// `FilterError::InvalidHalfWidth` if `h < 0`.
pub fn extend_rows(rows: &[Vec<f64>], h: i64) -> FilterResult<Vec<Vec<f64>>> {
    let h = validate_half_width(h)?;
    let grid = Grid::from_rows(rows)?;
    Ok(extend_grid(&grid, h)?.to_rows())
}
