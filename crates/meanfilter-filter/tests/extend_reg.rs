//! Border extension and window extent regression test
//!
//! Tests the two helpers of the mean filter:
//!   (1) extend_grid() places the input at offset (h, h) in a zero grid
//!   (2) window_extent() counts in-bounds cells in all three regimes

use meanfilter_core::Grid;
use meanfilter_filter::{
    FilterError, estimate_extent, extend_grid, extend_rows, window_extent, window_extents,
};
use meanfilter_test::{RegParams, random_grid};

#[test]
fn extend_reg() {
    let mut rp = RegParams::new("extend");

    for (n, h) in [(1usize, 0usize), (1, 3), (4, 1), (7, 2), (5, 9)] {
        let grid = random_grid(n, (n * 31 + h) as u32);
        let ext = extend_grid(&grid, h).expect("extend_grid");
        rp.compare_values((n + 2 * h) as f64, ext.size() as f64, 0.0);
        // Padding adds nothing
        rp.compare_values(grid.sum(), ext.sum(), 1e-9);

        for row in 0..ext.size() {
            for col in 0..ext.size() {
                let inside = (h..h + n).contains(&row) && (h..h + n).contains(&col);
                let expected = if inside {
                    grid.get_unchecked(row - h, col - h)
                } else {
                    0.0
                };
                if ext.get_unchecked(row, col) != expected {
                    rp.compare_values(expected, ext.get_unchecked(row, col), 0.0);
                }
            }
        }
    }

    // Empty input stays empty
    let empty = extend_grid(&Grid::new(0).expect("empty grid"), 4).expect("extend empty");
    rp.compare_values(0.0, empty.size() as f64, 0.0);

    // Padding too large to allocate is an error, not a panic
    let single = Grid::new_with_value(1, 7.0).expect("1x1 grid");
    let huge = extend_grid(&single, 1 << 30);
    rp.compare_values(
        1.0,
        matches!(huge, Err(FilterError::InvalidParameters(_))) as u8 as f64,
        0.0,
    );

    // Nested rows
    let rows = extend_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], 1).expect("extend_rows");
    rp.compare_values(4.0, rows.len() as f64, 0.0);
    rp.compare_values(4.0, rows[2][2], 0.0);
    rp.compare_values(0.0, rows[3][3], 0.0);

    assert!(rp.cleanup(), "extend regression test failed");
}

#[test]
fn window_extent_reg() {
    let mut rp = RegParams::new("window_extent");

    // n = 10, h = 2: near edge, interior, far edge
    let expected = [3usize, 4, 5, 5, 5, 5, 5, 5, 4, 3];
    for (coord, &e) in expected.iter().enumerate() {
        rp.compare_values(e as f64, window_extent(coord, 10, 2) as f64, 0.0);
    }
    rp.compare_values(
        1.0,
        if window_extents(10, 2) == expected { 1.0 } else { 0.0 },
        0.0,
    );

    // Bounds hold everywhere, including h >= n
    for n in 0..15usize {
        for h in 0..20usize {
            for coord in 0..n {
                let e = window_extent(coord, n, h);
                if e > n || e > 2 * h + 1 || e == 0 {
                    rp.compare_values(n.min(2 * h + 1) as f64, e as f64, 0.0);
                }
            }
        }
    }

    // Empty axis
    rp.compare_values(0.0, window_extent(0, 0, 5) as f64, 0.0);

    // Signed front-end
    rp.compare_values(5.0, estimate_extent(4, 10, 2).expect("extent") as f64, 0.0);
    let negative = matches!(estimate_extent(0, 10, -1), Err(FilterError::InvalidHalfWidth(-1)));
    rp.compare_values(1.0, negative as u8 as f64, 0.0);

    assert!(rp.cleanup(), "window_extent regression test failed");
}
