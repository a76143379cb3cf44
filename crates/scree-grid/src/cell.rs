//! The sparse input record consumed by [`GridBuilder`](crate::GridBuilder).

/// One cell of the initial sparse configuration.
///
/// Coordinates are true plane coordinates in the signed 16-bit range
/// (the input file format's range); `sand` is the number of grains
/// initially stacked on that cell. This is an input-only type — once the
/// grid is built, cells are addressed by `(row, col)` array indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRecord {
    /// True x coordinate (column axis).
    pub x: i16,
    /// True y coordinate (row axis).
    pub y: i16,
    /// Initial sand count.
    pub sand: u64,
}
