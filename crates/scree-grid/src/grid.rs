//! Dense origin-offset grid storage.
//!
//! [`Grid`] owns a row-major `Vec<u64>` of sand counts together with the
//! logical offset of index `(0, 0)` into the unbounded coordinate plane.
//! The simulation grows the grid outward as sand spreads; growth is a
//! single allocate-and-copy that shifts the origin, so the true coordinate
//! of an existing cell never changes.

use smallvec::SmallVec;

use crate::error::GridError;

/// A dense 2-D array of sand counts with a logical origin.
///
/// Cells are addressed by `(row, col)` with `row ∈ [0, height)` and
/// `col ∈ [0, width)`. The true plane coordinate of `(row, col)` is
/// `(origin_x + col, origin_y + row)`.
///
/// # Examples
///
/// ```
/// use scree_grid::Grid;
///
/// let mut grid = Grid::zeros(3, 3, -1, -1).unwrap();
/// grid.set(1, 1, 4);
/// assert_eq!(grid.sand_at(0, 0), Some(4));
///
/// grid.grow();
/// assert_eq!(grid.width(), 5);
/// assert_eq!(grid.sand_at(0, 0), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    origin_x: i64,
    origin_y: i64,
    cells: Vec<u64>,
}

impl Grid {
    /// Create a zero-filled grid of the given extent and origin.
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is 0, or
    /// [`GridError::DimensionTooLarge`] if the cell count overflows.
    pub fn zeros(
        width: usize,
        height: usize,
        origin_x: i64,
        origin_y: i64,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let area = width
            .checked_mul(height)
            .ok_or(GridError::DimensionTooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            origin_x,
            origin_y,
            cells: vec![0; area],
        })
    }

    /// Current width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True x coordinate of column 0.
    pub fn origin_x(&self) -> i64 {
        self.origin_x
    }

    /// True y coordinate of row 0.
    pub fn origin_y(&self) -> i64 {
        self.origin_y
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row * self.width + col
    }

    /// Sand count at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[self.idx(row, col)]
    }

    /// Overwrite the sand count at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, sand: u64) {
        let i = self.idx(row, col);
        self.cells[i] = sand;
    }

    /// Add `amount` grains to the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn add(&mut self, row: usize, col: usize, amount: u64) {
        let i = self.idx(row, col);
        self.cells[i] += amount;
    }

    /// The backing row-major cell slice.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// True x coordinate of column `col`.
    pub fn true_x(&self, col: usize) -> i64 {
        self.origin_x + col as i64
    }

    /// True y coordinate of row `row`.
    pub fn true_y(&self, row: usize) -> i64 {
        self.origin_y + row as i64
    }

    /// Sand count at the true plane coordinate `(x, y)`, or `None` if the
    /// coordinate lies outside the current dense extent.
    pub fn sand_at(&self, x: i64, y: i64) -> Option<u64> {
        let col = x - self.origin_x;
        let row = y - self.origin_y;
        if row < 0 || col < 0 || row >= self.height as i64 || col >= self.width as i64 {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }

    /// The in-bounds orthogonal neighbours of `(row, col)` as
    /// `(row, col)` pairs. Interior cells have 4, edges 3, corners 2.
    pub fn neighbours(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 4]> {
        let offsets: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut out = SmallVec::new();
        for (dr, dc) in offsets {
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if nr >= 0 && nc >= 0 && (nr as usize) < self.height && (nc as usize) < self.width {
                out.push((nr as usize, nc as usize));
            }
        }
        out
    }

    /// Total sand across all cells.
    ///
    /// Widened to `u128` so the sum cannot wrap even when many cells hold
    /// counts near `u64::MAX`.
    pub fn total_sand(&self) -> u128 {
        self.cells.iter().map(|&sand| u128::from(sand)).sum()
    }

    /// Grow the grid by one ring of zero cells on all sides.
    ///
    /// The backing array is replaced in a single allocate-and-copy; every
    /// existing cell shifts by `(1, 1)` in index space while the origin
    /// decreases by 1 on both axes, preserving true coordinates.
    pub fn grow(&mut self) {
        let new_width = self.width + 2;
        let new_height = self.height + 2;
        let mut next = vec![0u64; new_width * new_height];
        for row in 0..self.height {
            let src = row * self.width..(row + 1) * self.width;
            let dst = (row + 1) * new_width + 1;
            next[dst..dst + self.width].copy_from_slice(&self.cells[src]);
        }
        self.cells = next;
        self.width = new_width;
        self.height = new_height;
        self.origin_x -= 1;
        self.origin_y -= 1;
    }
}
