//! The synchronous topple pass.
//!
//! One pass reads a frozen source grid and accumulates into a fresh
//! output grid that is never read back mid-pass. Which cells topple and
//! how much they send is decided entirely from the source, so the result
//! is independent of traversal order.

use scree_grid::Grid;

use crate::rule::{TransferRule, TOPPLE_THRESHOLD};

/// Result of one topple pass.
#[derive(Clone, Debug)]
pub struct TopplePass {
    /// The next grid state.
    pub grid: Grid,
    /// Number of cells that redistributed sand in this pass.
    pub toppled_cells: u64,
    /// Total grains handed to neighbours in this pass.
    pub grains_moved: u64,
}

/// Apply one synchronous redistribution pass to `src`.
///
/// Cells below [`TOPPLE_THRESHOLD`] are copied unchanged. Each cell at or
/// above it keeps `rule.residue(n)` and sends `rule.share(n)` to each of
/// its four orthogonal neighbours; increments accumulate, so a cell can
/// receive from up to four toppling neighbours in the same pass.
///
/// Callers must run the expansion policy
/// ([`expand_if_border_unstable`](crate::expansion::expand_if_border_unstable))
/// first: the pass assumes no unstable cell sits on the border, so every
/// toppling cell has all four neighbours in bounds.
pub fn topple(src: &Grid, rule: TransferRule) -> TopplePass {
    let width = src.width();
    let height = src.height();

    // Residues first: the scatter below adds to cells that may also
    // topple, and a residue must replace only the source value.
    let mut next = src.clone();
    for row in 0..height {
        for col in 0..width {
            let sand = src.get(row, col);
            if sand >= TOPPLE_THRESHOLD {
                next.set(row, col, rule.residue(sand));
            }
        }
    }

    let mut toppled_cells = 0u64;
    let mut grains_moved = 0u64;
    for row in 0..height {
        for col in 0..width {
            let sand = src.get(row, col);
            if sand < TOPPLE_THRESHOLD {
                continue;
            }
            let share = rule.share(sand);
            let neighbours = src.neighbours(row, col);
            debug_assert_eq!(
                neighbours.len(),
                4,
                "unstable cell ({row}, {col}) on the border; expansion must run first"
            );
            for &(nr, nc) in &neighbours {
                next.add(nr, nc, share);
            }
            toppled_cells += 1;
            grains_moved += share * neighbours.len() as u64;
        }
    }

    TopplePass {
        grid: next,
        toppled_cells,
        grains_moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reference pass that visits source cells in reverse row-major
    /// order. Any traversal must produce the same output as `topple`.
    fn topple_reversed(src: &Grid, rule: TransferRule) -> Grid {
        let mut next = src.clone();
        for row in (0..src.height()).rev() {
            for col in (0..src.width()).rev() {
                let sand = src.get(row, col);
                if sand >= TOPPLE_THRESHOLD {
                    next.set(row, col, rule.residue(sand));
                }
            }
        }
        for row in (0..src.height()).rev() {
            for col in (0..src.width()).rev() {
                let sand = src.get(row, col);
                if sand < TOPPLE_THRESHOLD {
                    continue;
                }
                for &(nr, nc) in &src.neighbours(row, col) {
                    next.add(nr, nc, rule.share(sand));
                }
            }
        }
        next
    }

    fn interior_grid(values: &[(usize, usize, u64)]) -> Grid {
        // 7x7 with values kept off the border so no expansion is needed.
        let mut grid = Grid::zeros(7, 7, 0, 0).unwrap();
        for &(row, col, sand) in values {
            grid.set(row, col, sand);
        }
        grid
    }

    // ── Single-cell redistribution ──────────────────────────────

    #[test]
    fn four_grains_spread_to_neighbours() {
        let grid = interior_grid(&[(3, 3, 4)]);
        let pass = topple(&grid, TransferRule::Division);
        assert_eq!(pass.grid.get(3, 3), 0);
        assert_eq!(pass.grid.get(2, 3), 1);
        assert_eq!(pass.grid.get(4, 3), 1);
        assert_eq!(pass.grid.get(3, 2), 1);
        assert_eq!(pass.grid.get(3, 4), 1);
        assert_eq!(pass.toppled_cells, 1);
        assert_eq!(pass.grains_moved, 4);
    }

    #[test]
    fn division_moves_every_group_of_four() {
        let grid = interior_grid(&[(3, 3, 17)]);
        let pass = topple(&grid, TransferRule::Division);
        assert_eq!(pass.grid.get(3, 3), 1);
        assert_eq!(pass.grid.get(2, 3), 4);
        assert_eq!(pass.grains_moved, 16);
    }

    #[test]
    fn subtraction_moves_one_group() {
        let grid = interior_grid(&[(3, 3, 17)]);
        let pass = topple(&grid, TransferRule::Subtraction);
        assert_eq!(pass.grid.get(3, 3), 13);
        assert_eq!(pass.grid.get(2, 3), 1);
        assert_eq!(pass.grains_moved, 4);
    }

    // ── Accumulation and synchrony ──────────────────────────────

    #[test]
    fn cell_receives_from_multiple_neighbours() {
        // The center cell is surrounded by four toppling cells.
        let grid = interior_grid(&[(2, 3, 4), (4, 3, 4), (3, 2, 4), (3, 4, 4)]);
        let pass = topple(&grid, TransferRule::Division);
        assert_eq!(pass.grid.get(3, 3), 4);
        assert_eq!(pass.toppled_cells, 4);
    }

    #[test]
    fn toppling_cell_also_receives() {
        // Two adjacent toppling cells feed each other.
        let grid = interior_grid(&[(3, 3, 5), (3, 4, 8)]);
        let pass = topple(&grid, TransferRule::Division);
        // 5 -> residue 1 plus 2 from the right neighbour.
        assert_eq!(pass.grid.get(3, 3), 3);
        // 8 -> residue 0 plus 1 from the left neighbour.
        assert_eq!(pass.grid.get(3, 4), 1);
    }

    #[test]
    fn stable_grid_is_unchanged() {
        let grid = interior_grid(&[(1, 1, 3), (5, 5, 2), (3, 3, 1)]);
        let pass = topple(&grid, TransferRule::Division);
        assert_eq!(pass.grid, grid);
        assert_eq!(pass.toppled_cells, 0);
        assert_eq!(pass.grains_moved, 0);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_rule() -> impl Strategy<Value = TransferRule> {
        prop_oneof![Just(TransferRule::Division), Just(TransferRule::Subtraction)]
    }

    proptest! {
        #[test]
        fn pass_conserves_mass(
            values in proptest::collection::vec((1usize..6, 1usize..6, 0u64..100), 1..12),
            rule in arb_rule(),
        ) {
            let grid = interior_grid(&values);
            let pass = topple(&grid, rule);
            prop_assert_eq!(pass.grid.total_sand(), grid.total_sand());
        }

        #[test]
        fn traversal_order_does_not_matter(
            values in proptest::collection::vec((1usize..6, 1usize..6, 0u64..100), 1..12),
            rule in arb_rule(),
        ) {
            let grid = interior_grid(&values);
            prop_assert_eq!(topple(&grid, rule).grid, topple_reversed(&grid, rule));
        }
    }
}
