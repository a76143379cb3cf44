//! Border expansion policy.
//!
//! The active region must stay enclosed by a zero-valued border so that a
//! topple pass never needs to write outside the grid. Before each pass
//! the border ring is scanned; if any bordering cell could topple, the
//! grid grows by exactly one ring.

use scree_grid::Grid;

use crate::rule::TOPPLE_THRESHOLD;

/// Grow `grid` by one zero ring iff any border cell holds
/// [`TOPPLE_THRESHOLD`] or more grains. Returns whether the grid grew.
///
/// One ring per pass suffices: a synchronous pass moves sand at most one
/// cell outward, so a border cell that was zero before the pass cannot
/// itself topple during it. A corner cell is seen by both the row scan
/// and the column scan, but detection is a single boolean and growth
/// happens at most once per call.
pub fn expand_if_border_unstable(grid: &mut Grid) -> bool {
    if border_unstable(grid) {
        grid.grow();
        true
    } else {
        false
    }
}

/// Scan only the outer ring: row 0, the last row, column 0, the last
/// column.
fn border_unstable(grid: &Grid) -> bool {
    let width = grid.width();
    let height = grid.height();
    for row in 0..height {
        if grid.get(row, 0) >= TOPPLE_THRESHOLD || grid.get(row, width - 1) >= TOPPLE_THRESHOLD {
            return true;
        }
    }
    for col in 0..width {
        if grid.get(0, col) >= TOPPLE_THRESHOLD || grid.get(height - 1, col) >= TOPPLE_THRESHOLD {
            return true;
        }
    }
    false
}
