//! Grid - Square floating-point array
//!
//! `Grid` is an N×N array of `f64` values. It is the only data structure
//! the filters operate on: the input, the zero-padded working copy and the
//! filtered output are all grids.
//!
//! # Examples
//!
//! ```
//! use meanfilter_core::Grid;
//!
//! // Create a 3x3 grid from nested rows
//! let grid = Grid::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.get(1, 2).unwrap(), 6.0);
//! assert_eq!(grid.mean(), Some(5.0));
//! ```

use crate::error::{Error, Result};

/// Square floating-point grid
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The cell at
/// `(row, col)` is at index `row * size + col`.
///
/// A grid of size 0 is valid and holds no cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows (and columns)
    size: usize,
    /// Cell data (row-major, no padding)
    data: Vec<f64>,
}

/// Number of cells in an `n`×`n` grid.
///
/// Fails when the cell count or its size in bytes exceeds `isize::MAX`,
/// the largest allocation a `Vec` accepts.
fn cell_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .filter(|&cells| {
            cells
                .checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(Error::InvalidDimension { rows: n, cols: n })
}

impl Grid {
    /// Create a new grid with all cells set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if `n * n` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use meanfilter_core::Grid;
    ///
    /// let grid = Grid::new(4).unwrap();
    /// assert_eq!(grid.size(), 4);
    /// assert_eq!(grid.len(), 16);
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        Self::new_with_value(n, 0.0)
    }

    /// Create a new grid with all cells set to `value`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if the grid is too large to
    /// allocate.
    pub fn new_with_value(n: usize, value: f64) -> Result<Self> {
        let len = cell_count(n)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::InvalidDimension { rows: n, cols: n })?;
        data.resize(len, value);
        Ok(Grid { size: n, data })
    }

    /// Create a grid from row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `data.len() != n * n`.
    pub fn from_data(n: usize, data: Vec<f64>) -> Result<Self> {
        let expected = cell_count(n)?;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {n}x{n} = {expected}",
                data.len()
            )));
        }
        Ok(Grid { size: n, data })
    }

    /// Create a grid from row-major data with an explicit shape
    ///
    /// This is the entry point for callers that hold a rectangular
    /// array and want the squareness check done for them.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotSquare` if `rows != cols`, or
    /// `Error::InvalidParameter` if the data length doesn't match.
    pub fn from_shape(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        Self::from_data(rows, data)
    }

    /// Create a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns `Error::NotSquare` if any row length differs from the
    /// number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use meanfilter_core::Grid;
    ///
    /// assert!(Grid::from_rows(&[vec![1.0, 2.0]]).is_err());
    /// assert!(Grid::from_rows(&[]).unwrap().is_empty());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(Error::NotSquare {
                rows: n,
                cols: bad.len(),
            });
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Grid { size: n, data })
    }

    /// Number of rows (equal to the number of columns)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the grid holds no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the value at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if either coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        let idx = self.checked_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Set the value at (row, col)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if either coordinate is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// Get the value at (row, col) without the coordinate check
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Set the value at (row, col) without the coordinate check
    ///
    /// Panics if the computed index falls outside the buffer.
    #[inline]
    pub fn set_unchecked(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] = value;
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.size || col >= self.size {
            return Err(Error::IndexOutOfBounds {
                index: row.saturating_mul(self.size).saturating_add(col),
                len: self.data.len(),
            });
        }
        Ok(row * self.size + col)
    }

    /// Raw read-only data access (row-major)
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Raw mutable data access (row-major)
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the grid and return its row-major buffer
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Get a row as a slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Get a row as a mutable slice
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.size;
        &mut self.data[start..start + self.size]
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.size.max(1))
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Set every cell to `value`
    pub fn set_all(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Return the transposed grid
    pub fn transpose(&self) -> Grid {
        let n = self.size;
        let mut data = vec![0.0; self.data.len()];
        for row in 0..n {
            for col in 0..n {
                data[col * n + row] = self.data[row * n + col];
            }
        }
        Grid { size: n, data }
    }

    /// Apply `f` to every cell, returning a new grid
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Grid {
        Grid {
            size: self.size,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Sum of all cells
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Mean of all cells, or `None` for an empty grid
    pub fn mean(&self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.sum() / self.data.len() as f64)
    }

    /// Minimum cell value, or `None` for an empty grid
    pub fn min_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Maximum cell value, or `None` for an empty grid
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// Largest absolute difference between corresponding cells
    ///
    /// Returns 0.0 for two empty grids.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the grids differ in size.
    pub fn max_abs_diff(&self, other: &Grid) -> Result<f64> {
        if self.size != other.size {
            return Err(Error::DimensionMismatch {
                expected: self.size,
                actual: other.size,
            });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }

    /// True if `self[r][c]` and `self[c][r]` agree within `tolerance`
    /// for every pair of cells
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        let n = self.size;
        (0..n).all(|row| {
            (row + 1..n).all(|col| {
                (self.data[row * n + col] - self.data[col * n + row]).abs() <= tolerance
            })
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
