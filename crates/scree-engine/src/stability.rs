//! The stability scan that terminates the simulation.

use scree_grid::Grid;

use crate::rule::TOPPLE_THRESHOLD;

/// True iff every cell holds fewer than [`TOPPLE_THRESHOLD`] grains.
///
/// Pure full-extent scan, O(width·height). It runs once per iteration, so
/// the total stability work over a run is proportional to the sum of grid
/// areas across all iterations — the dominant cost driver alongside the
/// topple pass itself.
pub fn is_stable(grid: &Grid) -> bool {
    grid.cells().iter().all(|&sand| sand < TOPPLE_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_grid_is_stable() {
        let grid = Grid::zeros(4, 4, 0, 0).unwrap();
        assert!(is_stable(&grid));
    }

    #[test]
    fn three_everywhere_is_stable() {
        let mut grid = Grid::zeros(3, 3, 0, 0).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, 3);
            }
        }
        assert!(is_stable(&grid));
    }

    #[test]
    fn single_cell_at_threshold_is_unstable() {
        let mut grid = Grid::zeros(3, 3, 0, 0).unwrap();
        grid.set(1, 2, 4);
        assert!(!is_stable(&grid));
    }
}
