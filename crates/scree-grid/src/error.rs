//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// [`GridBuilder::build`](crate::GridBuilder::build) was called with
    /// no cell records, so there is no bounding rectangle to enclose.
    EmptyInput,
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// The requested extent does not fit in addressable memory.
    DimensionTooLarge {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cell list contains no records"),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { width, height } => {
                write!(f, "grid extent {width}x{height} overflows addressable memory")
            }
        }
    }
}

impl std::error::Error for GridError {}
