//! meanfilter-test - Regression test framework for meanfilter
//!
//! This crate provides a small regression test harness, supporting two
//! modes:
//!
//! - **Compare**: Compare computed values and grids (default)
//! - **Display**: Compare, and also print every compared grid
//!
//! It also provides deterministic grid generators so tests never depend
//! on external data files.
//!
//! # Usage
//!
//! ```ignore
//! use meanfilter_test::{RegParams, ramp_grid};
//!
//! let mut rp = RegParams::new("mean_filter");
//! let grid = ramp_grid(8);
//! rp.compare_values(8.0, grid.size() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use meanfilter_core::Grid;

/// Grid whose cell `(row, col)` holds `row * n + col`
pub fn ramp_grid(n: usize) -> Grid {
    let data = (0..n * n).map(|i| i as f64).collect();
    Grid::from_data(n, data).expect("ramp grid dimensions")
}

/// Grid alternating between `low` and `high` like a checkerboard
pub fn checkerboard_grid(n: usize, low: f64, high: f64) -> Grid {
    let mut grid = Grid::new(n).expect("checkerboard grid dimensions");
    for row in 0..n {
        for col in 0..n {
            let value = if (row + col) % 2 == 0 { low } else { high };
            grid.set_unchecked(row, col, value);
        }
    }
    grid
}

/// Grid of reproducible pseudo-random values in `[0, 100)`
pub fn random_grid(n: usize, seed: u32) -> Grid {
    let mut rng = SimpleRng::new(seed);
    let data = (0..n * n).map(|_| 100.0 * rng.next_f64()).collect();
    Grid::from_data(n, data).expect("random grid dimensions")
}

/// Random grid made symmetric under transpose
pub fn symmetric_grid(n: usize, seed: u32) -> Grid {
    let grid = random_grid(n, seed);
    let mut sym = grid.clone();
    for row in 0..n {
        for col in 0..row {
            let value = grid.get_unchecked(row, col);
            sym.set_unchecked(col, row, value);
        }
    }
    sym
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // Knuth's MMIX multiplier and increment
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        // Top 53 bits keep the result strictly below 1.0
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }
}
