//! Sliding-sum mean filter
//!
//! Replaces every cell with the mean of the in-bounds cells inside a
//! `(2h + 1) x (2h + 1)` window centered on it, in O(N²) time regardless
//! of `h`.
//!
//! # Algorithm
//!
//! 1. Pad the grid with `h` zeros on every side ([`extend_grid`]).
//! 2. Keep one running sum per padded column covering `2h + 1` rows.
//! 3. For each output row, slide a horizontal window across those column
//!    sums, adding the entering column and subtracting the leaving one.
//! 4. Move the column sums down one row by adding the entering row and
//!    subtracting the leaving one.
//!
//! Zeros in the padding contribute nothing, so dividing each window sum by
//! `row_extent * col_extent` (see [`window_extent`](crate::window_extent))
//! yields the exact mean of the real neighbors at the border.
//!
//! [`mean_filter_direct`] evaluates the same result window by window in
//! O(N²·h²) and is kept as a reference.

use crate::border::extend_grid;
use crate::extent::{unclamped_window_extents, validate_half_width, window_extents};
use crate::{FilterError, FilterResult};
use meanfilter_core::Grid;

/// Largest number of decimals accepted by [`Rounding::Uniform`]
pub const MAX_DECIMALS: u32 = 15;

/// Rounding applied to filtered values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Keep the full `f64` result everywhere
    #[default]
    Exact,
    /// Round to two decimals through single precision, except in the first
    /// output row and first output column, which stay unrounded.
    ///
    /// Reproduces historical outputs of this filter bit for bit, including
    /// their border divisors: the corner divides by `(h + 1)²`, the first
    /// row and column by `extent · (h + 1)`, and extents are not clipped
    /// to the grid. When `N < 2h + 1` those divisors count cells outside
    /// the grid, which shrinks border values toward zero.
    Legacy,
    /// Round every cell, half away from zero, to the given number of
    /// decimals
    Uniform(u32),
}

impl Rounding {
    /// Apply the rounding to a value at the given output position
    fn apply(self, value: f64, row: usize, col: usize) -> f64 {
        match self {
            Rounding::Exact => value,
            Rounding::Legacy if row == 0 || col == 0 => value,
            Rounding::Legacy => (((value * 100.0) as f32).round() / 100.0f32) as f64,
            Rounding::Uniform(decimals) => {
                let scale = 10f64.powi(decimals as i32);
                (value * scale).round() / scale
            }
        }
    }
}

/// Parameters for [`fast_mean_filter_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeanFilterOptions {
    /// Half-width of the square window; the full side is `2h + 1`
    pub half_width: usize,
    /// Rounding applied to the output
    pub rounding: Rounding,
}

impl Default for MeanFilterOptions {
    fn default() -> Self {
        Self {
            half_width: 1,
            rounding: Rounding::Exact,
        }
    }
}

impl MeanFilterOptions {
    /// Options with the given half-width and exact output
    pub fn new(half_width: usize) -> Self {
        Self {
            half_width,
            ..Self::default()
        }
    }

    /// Set the output rounding
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Check the options for consistency
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidParameters` if uniform rounding asks
    /// for more than [`MAX_DECIMALS`] decimals.
    pub fn validate(&self) -> FilterResult<()> {
        if let Rounding::Uniform(decimals) = self.rounding
            && decimals > MAX_DECIMALS
        {
            return Err(FilterError::InvalidParameters(format!(
                "rounding supports at most {MAX_DECIMALS} decimals, got {decimals}"
            )));
        }
        Ok(())
    }
}

/// Mean filter with window half-width `h` and unrounded output.
///
/// See [`fast_mean_filter_with`].
///
/// # Examples
///
/// ```
/// use meanfilter_core::Grid;
/// use meanfilter_filter::fast_mean_filter;
///
/// let grid = Grid::from_rows(&[
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
/// ])
/// .unwrap();
/// let out = fast_mean_filter(&grid, 1).unwrap();
/// assert_eq!(out.get(0, 0).unwrap(), 3.0);
/// assert_eq!(out.get(1, 1).unwrap(), 5.0);
/// ```
pub fn fast_mean_filter(grid: &Grid, h: usize) -> FilterResult<Grid> {
    fast_mean_filter_with(grid, &MeanFilterOptions::new(h))
}

/// Mean filter over a square grid using sliding column and row sums.
///
/// The output has the same size as the input. Each cell is the mean of
/// the input cells within `h` rows and `h` columns of it, counting only
/// cells that lie inside the grid. `h` may exceed the grid size. An empty
/// grid gives an empty result.
///
/// # Errors
///
/// Returns `FilterError::InvalidParameters` if the options are invalid or
/// the padded grid is too large to allocate.
pub fn fast_mean_filter_with(grid: &Grid, options: &MeanFilterOptions) -> FilterResult<Grid> {
    options.validate()?;

    let n = grid.size();
    let h = options.half_width;
    let rounding = options.rounding;
    log::debug!("mean filter: {n}x{n} grid, h = {h}, rounding = {rounding:?}");

    if n == 0 {
        return Ok(Grid::new(0)?);
    }

    // Once the window covers the whole grid from every cell, every window
    // sum is the grid total; a wider pad only adds zeros.
    let reach = h.min(n - 1);
    let extended = extend_grid(grid, reach)?;
    let ext_size = extended.size();
    // Window side in padded cells; fits because ext_size = n + 2 * reach did
    let win = 2 * reach + 1;

    let (extents, edge) = match rounding {
        Rounding::Legacy => (unclamped_window_extents(n, h), h as f64 + 1.0),
        _ => {
            let extents = window_extents(n, h);
            let edge = extents[0] as f64;
            (extents, edge)
        }
    };

    // Column sums over the first `win` padded rows
    let mut col_sum = vec![0.0f64; ext_size];
    for row in 0..win {
        for (sum, &v) in col_sum.iter_mut().zip(extended.row(row)) {
            *sum += v;
        }
    }
    log::trace!("seeded {ext_size} column sums over {win} rows");

    let mut out = Grid::new(n)?;

    // First output row
    let mut sum: f64 = col_sum[..win].iter().sum();
    out.set_unchecked(0, 0, rounding.apply(sum / (edge * edge), 0, 0));
    for col in 1..n {
        sum = sum - col_sum[col - 1] + col_sum[col + win - 1];
        let count = extents[col] as f64 * edge;
        out.set_unchecked(0, col, rounding.apply(sum / count, 0, col));
    }

    for row in 1..n {
        // Move the vertical window down one row
        let leaving = extended.row(row - 1);
        let entering = extended.row(row + win - 1);
        for ((sum, &old), &new) in col_sum.iter_mut().zip(leaving).zip(entering) {
            *sum = *sum - old + new;
        }

        let row_extent = extents[row] as f64;
        sum = col_sum[..win].iter().sum();
        out.set_unchecked(row, 0, rounding.apply(sum / (row_extent * edge), row, 0));

        for col in 1..n {
            sum = sum - col_sum[col - 1] + col_sum[col + win - 1];
            let count = extents[col] as f64 * row_extent;
            out.set_unchecked(row, col, rounding.apply(sum / count, row, col));
        }
    }

    Ok(out)
}

/// Mean filter evaluated window by window.
///
/// Produces the same values as [`fast_mean_filter`] (up to floating-point
/// summation order) in O(N²·h²) time.
pub fn mean_filter_direct(grid: &Grid, h: usize) -> Grid {
    let n = grid.size();
    let mut out = grid.clone();

    for row in 0..n {
        let rmin = row.saturating_sub(h);
        let rmax = row.saturating_add(h).min(n - 1);
        for col in 0..n {
            let cmin = col.saturating_sub(h);
            let cmax = col.saturating_add(h).min(n - 1);

            let mut sum = 0.0;
            for r in rmin..=rmax {
                sum += grid.row(r)[cmin..=cmax].iter().sum::<f64>();
            }
            let count = ((rmax - rmin + 1) * (cmax - cmin + 1)) as f64;
            out.set_unchecked(row, col, sum / count);
        }
    }

    out
}

/// Nested-row front-end to [`fast_mean_filter`].
///
/// # Errors
///
/// Returns `FilterError::Core` if the rows are not square, or
/// `FilterError::InvalidHalfWidth` if `h < 0`.
///
/// # Examples
///
/// ```
/// use meanfilter_filter::mean_filter_rows;
///
/// let out = mean_filter_rows(&[vec![7.0]], 3).unwrap();
/// assert_eq!(out, vec![vec![7.0]]);
/// assert!(mean_filter_rows(&[vec![1.0, 2.0]], 1).is_err());
/// assert!(mean_filter_rows(&[vec![1.0]], -1).is_err());
/// ```
pub fn mean_filter_rows(rows: &[Vec<f64>], h: i64) -> FilterResult<Vec<Vec<f64>>> {
    let h = validate_half_width(h)?;
    let grid = Grid::from_rows(rows)?;
    Ok(fast_mean_filter(&grid, h)?.to_rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn grid_3x3() -> Grid {
        Grid::from_rows(&[
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap()
    }

    fn ramp(n: usize) -> Grid {
        Grid::from_data(n, (0..n * n).map(|i| (i % 17) as f64 * 1.25).collect()).unwrap()
    }

    #[test]
    fn test_3x3_scenario() {
        let out = fast_mean_filter(&grid_3x3(), 1).unwrap();
        assert_eq!(out.get(1, 1).unwrap(), 5.0);
        assert_eq!(out.get(0, 0).unwrap(), 3.0);
        // (1+2+3+4+5+6) / 6
        assert_eq!(out.get(0, 1).unwrap(), 3.5);
        // (5+6+8+9) / 4
        assert_eq!(out.get(2, 2).unwrap(), 7.0);
    }

    #[test]
    fn test_single_cell_any_half_width() {
        let grid = Grid::new_with_value(1, 7.0).unwrap();
        for h in [0, 1, 2, 10, 100] {
            let out = fast_mean_filter(&grid, h).unwrap();
            assert_eq!(out.to_rows(), vec![vec![7.0]], "h = {h}");
        }
    }

    #[test]
    fn test_half_width_far_beyond_grid() {
        let grid = Grid::new_with_value(1, 7.0).unwrap();
        let out = fast_mean_filter(&grid, 1 << 30).unwrap();
        assert_eq!(out.to_rows(), vec![vec![7.0]]);

        let grid = grid_3x3();
        let wide = fast_mean_filter(&grid, usize::MAX / 4).unwrap();
        assert_eq!(wide, fast_mean_filter(&grid, 2).unwrap());
        assert!(wide.data().iter().all(|&v| (v - 5.0).abs() < EPS));
    }

    #[test]
    fn test_zeros_large_half_width() {
        let grid = Grid::new(4).unwrap();
        let out = fast_mean_filter(&grid, 2).unwrap();
        assert_eq!(out.size(), 4);
        assert!(out.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_empty_grid() {
        let out = fast_mean_filter(&Grid::new(0).unwrap(), 3).unwrap();
        assert!(out.is_empty());
        assert!(mean_filter_rows(&[], 2).unwrap().is_empty());
    }

    #[test]
    fn test_zero_half_width_is_identity() {
        let grid = ramp(9);
        assert_eq!(fast_mean_filter(&grid, 0).unwrap(), grid);
    }

    #[test]
    fn test_uniform_input() {
        for n in 1..8 {
            let grid = Grid::new_with_value(n, 3.0).unwrap();
            for h in 0..10 {
                let out = fast_mean_filter(&grid, h).unwrap();
                assert!(
                    out.data().iter().all(|&v| (v - 3.0).abs() < EPS),
                    "n = {n}, h = {h}"
                );
            }
        }
    }

    #[test]
    fn test_matches_direct() {
        for n in 1..10 {
            let grid = ramp(n);
            for h in 0..12 {
                let fast = fast_mean_filter(&grid, h).unwrap();
                let direct = mean_filter_direct(&grid, h);
                let diff = fast.max_abs_diff(&direct).unwrap();
                assert!(diff < EPS, "n = {n}, h = {h}, diff = {diff}");
            }
        }
    }

    #[test]
    fn test_corner_is_mean_of_corner_block() {
        let grid = ramp(8);
        for h in 0..7 {
            let out = fast_mean_filter(&grid, h).unwrap();
            let mut sum = 0.0;
            for r in 0..=h {
                for c in 0..=h {
                    sum += grid.get_unchecked(r, c);
                }
            }
            let expected = sum / ((h + 1) * (h + 1)) as f64;
            assert!((out.get(0, 0).unwrap() - expected).abs() < EPS, "h = {h}");
        }
    }

    #[test]
    fn test_transpose_symmetry() {
        let grid = ramp(7);
        let out = fast_mean_filter(&grid, 2).unwrap();
        let out_t = fast_mean_filter(&grid.transpose(), 2).unwrap();
        assert!(out.transpose().max_abs_diff(&out_t).unwrap() < EPS);
    }

    #[test]
    fn test_input_untouched() {
        let grid = grid_3x3();
        let _ = fast_mean_filter(&grid, 1).unwrap();
        assert_eq!(grid, grid_3x3());
    }

    #[test]
    fn test_legacy_rounding() {
        let grid = Grid::from_rows(&[
            vec![1.0, 2.0, 2.0, 1.0],
            vec![0.0, 1.0, 3.0, 2.0],
            vec![2.0, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, 2.0],
        ])
        .unwrap();
        let options = MeanFilterOptions::new(1).with_rounding(Rounding::Legacy);
        let legacy = fast_mean_filter_with(&grid, &options).unwrap();
        let exact = fast_mean_filter(&grid, 1).unwrap();

        for i in 0..4 {
            assert_eq!(legacy.get_unchecked(0, i), exact.get_unchecked(0, i));
            assert_eq!(legacy.get_unchecked(i, 0), exact.get_unchecked(i, 0));
        }
        // (1+2+3+0+1+0+2+0+1) / 9 = 10/9
        assert_eq!(exact.get_unchecked(1, 1), 10.0 / 9.0);
        assert_eq!(legacy.get_unchecked(1, 1), (111.0f32 / 100.0f32) as f64);
        // (1+1+0+2) / 4
        assert_eq!(exact.get_unchecked(3, 3), 1.0);
        let expected = (((exact.get_unchecked(3, 3) * 100.0) as f32).round() / 100.0) as f64;
        assert_eq!(legacy.get_unchecked(3, 3), expected);
    }

    #[test]
    fn test_legacy_unclipped_divisors() {
        // 4x4 of ones, h = 2: the window is wider than the grid, so border
        // divisors count cells that do not exist
        let grid = Grid::new_with_value(4, 1.0).unwrap();
        let options = MeanFilterOptions::new(2).with_rounding(Rounding::Legacy);
        let out = fast_mean_filter_with(&grid, &options).unwrap();
        // Row 0 is unrounded: 9/9, 12/12, 12/15, 9/9
        assert_eq!(out.row(0), &[1.0, 1.0, 0.8, 1.0]);
        // Interior (2, 2): 16 / (5 * 5) through single precision
        assert_eq!(out.get_unchecked(2, 2), 0.64f32 as f64);

        // Exact output is the true mean everywhere
        let exact = fast_mean_filter(&grid, 2).unwrap();
        assert!(exact.data().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_uniform_rounding() {
        let options = MeanFilterOptions::new(1).with_rounding(Rounding::Uniform(1));
        let grid = Grid::from_rows(&[vec![1.0, 2.0], vec![2.0, 2.0]]).unwrap();
        // Every window covers the whole 2x2 grid: 7/4 = 1.75 -> 1.8
        let out = fast_mean_filter_with(&grid, &options).unwrap();
        assert!(out.data().iter().all(|&v| (v - 1.8).abs() < EPS));
    }

    #[test]
    fn test_options_validation() {
        let options = MeanFilterOptions::new(1).with_rounding(Rounding::Uniform(16));
        assert!(matches!(
            fast_mean_filter_with(&grid_3x3(), &options),
            Err(FilterError::InvalidParameters(_))
        ));
        assert_eq!(MeanFilterOptions::default(), MeanFilterOptions::new(1));
    }

    #[test]
    fn test_rows_front_end() {
        let rows = grid_3x3().to_rows();
        let out = mean_filter_rows(&rows, 1).unwrap();
        assert_eq!(out[1][1], 5.0);
        assert!(matches!(
            mean_filter_rows(&rows, -3),
            Err(FilterError::InvalidHalfWidth(-3))
        ));
        assert!(matches!(
            mean_filter_rows(&[vec![1.0, 2.0], vec![3.0]], 1),
            Err(FilterError::Core(_))
        ));
    }
}
