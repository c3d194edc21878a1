//! Regression test parameters and operations

use crate::error::TestError;
use meanfilter_core::Grid;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare values and grids (default)
    #[default]
    Compare,
    /// Compare, and print every compared grid to stderr
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    /// Parse mode from a string; anything unrecognized is `Compare`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "mean_filter")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, err: TestError) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, err);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        // NaN never compares within delta
        if diff <= delta {
            return true;
        }
        self.record_failure(TestError::ValueMismatch {
            index: self.index,
            expected,
            actual,
            delta,
        });
        false
    }

    /// Compare two grids cell by cell
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected grid
    /// * `actual` - Actual computed grid
    /// * `delta` - Maximum allowed difference per cell
    ///
    /// # Returns
    ///
    /// `true` if both grids have the same size and every cell matches
    /// within delta, `false` otherwise.
    pub fn compare_grids(&mut self, expected: &Grid, actual: &Grid, delta: f64) -> bool {
        self.index += 1;

        if self.display() {
            eprintln!("[{}] expected:", self.index);
            print_grid(expected);
            eprintln!("[{}] actual:", self.index);
            print_grid(actual);
        }

        if expected.size() != actual.size() {
            self.record_failure(TestError::GridMismatch {
                index: self.index,
                message: format!(
                    "size mismatch: expected {}, got {}",
                    expected.size(),
                    actual.size()
                ),
            });
            return false;
        }

        let n = expected.size();
        for row in 0..n {
            for col in 0..n {
                let e = expected.get_unchecked(row, col);
                let a = actual.get_unchecked(row, col);
                let diff = (e - a).abs();
                if diff > delta || diff.is_nan() {
                    self.record_failure(TestError::GridMismatch {
                        index: self.index,
                        message: format!(
                            "cell ({row}, {col}): expected {e}, got {a}, allowed delta {delta}"
                        ),
                    });
                    return false;
                }
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 == data2 {
            return true;
        }
        let msg = format!(
            "Failure in {}_reg: string comparison for index {}\n\
             sizes: {} vs {}",
            self.test_name,
            self.index,
            data1.len(),
            data2.len()
        );
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all tests passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn print_grid(grid: &Grid) {
    for row in grid.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:8.3}")).collect();
        eprintln!("  {}", cells.join(" "));
    }
}
