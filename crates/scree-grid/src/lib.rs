//! Grid storage for the Scree sandpile simulator.
//!
//! This is the leaf crate of the workspace. It defines the dense,
//! origin-offset [`Grid`] container that the engine evolves, the sparse
//! [`CellRecord`] input type, and the [`GridBuilder`] that turns an
//! unordered collection of records into the minimal enclosing grid.
//!
//! Grids live in an unbounded integer coordinate plane: the dense backing
//! array covers only the current active region, and the stored origin maps
//! array indices back to true coordinates. Growing the grid never changes
//! the true coordinate of an existing cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod cell;
pub mod error;
pub mod grid;

pub use builder::GridBuilder;
pub use cell::CellRecord;
pub use error::GridError;
pub use grid::Grid;
