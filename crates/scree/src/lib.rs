//! Scree: an Abelian sandpile simulator.
//!
//! This is the facade crate that re-exports the public API from the
//! workspace sub-crates. For most users, adding `scree` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use scree::prelude::*;
//!
//! // One cell holding four grains: the smallest pile that topples.
//! let mut builder = GridBuilder::new();
//! builder.insert(CellRecord { x: 0, y: 0, sand: 4 });
//! let grid = builder.build().unwrap();
//!
//! let mut sim = Simulation::new(grid, SimConfig::default()).unwrap();
//! let report = sim.run(&mut DiscardSink).unwrap();
//!
//! assert_eq!(report.outcome, RunState::Stable);
//! assert_eq!(report.iterations, 1);
//! // The grain pile emptied into its four neighbours.
//! assert_eq!(sim.grid().sand_at(0, 0), Some(0));
//! assert_eq!(sim.grid().sand_at(1, 0), Some(1));
//! assert_eq!(sim.grid().sand_at(0, -1), Some(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `scree-grid` | Dense origin-offset grid, cell records, builder |
//! | [`engine`] | `scree-engine` | Topple pass, expansion, simulation loop, metrics |
//! | [`render`] | `scree-render` | Palette, BMP encoding, snapshot writer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage and construction (`scree-grid`).
///
/// [`grid::Grid`] is the dense container the engine evolves;
/// [`grid::GridBuilder`] turns sparse [`grid::CellRecord`]s into the
/// minimal enclosing grid.
pub use scree_grid as grid;

/// The evolution engine (`scree-engine`).
///
/// [`engine::Simulation`] drives stability check → expansion → topple to
/// a halt, emitting [`engine::Snapshot`]s through an
/// [`engine::SnapshotSink`].
pub use scree_engine as engine;

/// Bitmap rendering (`scree-render`).
///
/// [`render::BmpSnapshotWriter`] persists snapshots as 4-bit indexed BMP
/// files.
pub use scree_render as render;

/// Common imports for typical Scree usage.
///
/// ```rust
/// use scree::prelude::*;
/// ```
pub mod prelude {
    pub use scree_engine::{
        DiscardSink, RunMetrics, RunReport, RunState, SimConfig, SimError, Simulation, Snapshot,
        SnapshotKind, SnapshotSink, TransferRule,
    };
    pub use scree_grid::{CellRecord, Grid, GridBuilder, GridError};
    pub use scree_render::BmpSnapshotWriter;
}
