//! Construction of the initial [`Grid`] from sparse cell records.

use indexmap::IndexMap;

use crate::cell::CellRecord;
use crate::error::GridError;
use crate::grid::Grid;

/// Accumulates [`CellRecord`]s and builds the minimal enclosing [`Grid`].
///
/// Records are keyed by true coordinate, so inserting the same coordinate
/// twice overwrites the earlier record (last write wins). `build`
/// computes the bounding rectangle of all records, allocates a zeroed
/// grid of exactly that extent with the rectangle's minimum corner as the
/// origin, and places each record.
///
/// # Examples
///
/// ```
/// use scree_grid::{CellRecord, GridBuilder};
///
/// let mut builder = GridBuilder::new();
/// builder.insert(CellRecord { x: -1, y: 2, sand: 7 });
/// builder.insert(CellRecord { x: 3, y: 4, sand: 1 });
/// let grid = builder.build().unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (5, 3));
/// assert_eq!((grid.origin_x(), grid.origin_y()), (-1, 2));
/// assert_eq!(grid.sand_at(-1, 2), Some(7));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    cells: IndexMap<(i16, i16), u64>,
}

impl GridBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one record. A record at an already-seen coordinate replaces
    /// the previous one.
    pub fn insert(&mut self, record: CellRecord) {
        self.cells.insert((record.x, record.y), record.sand);
    }

    /// Number of distinct coordinates inserted so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no records have been inserted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Build the grid enclosing every inserted record.
    ///
    /// Returns [`GridError::EmptyInput`] if no records were inserted.
    pub fn build(self) -> Result<Grid, GridError> {
        if self.cells.is_empty() {
            return Err(GridError::EmptyInput);
        }
        let mut min_x = i16::MAX;
        let mut min_y = i16::MAX;
        let mut max_x = i16::MIN;
        let mut max_y = i16::MIN;
        for &(x, y) in self.cells.keys() {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let width = (i32::from(max_x) - i32::from(min_x)) as usize + 1;
        let height = (i32::from(max_y) - i32::from(min_y)) as usize + 1;
        let mut grid = Grid::zeros(width, height, i64::from(min_x), i64::from(min_y))?;
        for ((x, y), sand) in self.cells {
            let col = (i32::from(x) - i32::from(min_x)) as usize;
            let row = (i32::from(y) - i32::from(min_y)) as usize;
            grid.set(row, col, sand);
        }
        Ok(grid)
    }
}

impl FromIterator<CellRecord> for GridBuilder {
    fn from_iter<I: IntoIterator<Item = CellRecord>>(iter: I) -> Self {
        let mut builder = Self::new();
        for record in iter {
            builder.insert(record);
        }
        builder
    }
}
