//! Borrowed snapshot views and the sink seam.

use scree_grid::Grid;

use crate::error::SnapshotError;

/// Why a snapshot was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Cadence-driven snapshot of a still-running simulation.
    Periodic,
    /// The single snapshot emitted after the loop halts.
    Final,
}

/// A read-only view of the grid at one instant.
///
/// Snapshots borrow the simulation's grid, so the borrow checker prevents
/// stepping while one is alive; they are consumed (typically rendered)
/// before the next pass starts.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    /// The grid at this instant.
    pub grid: &'a Grid,
    /// Completed topple passes when the snapshot was taken.
    pub iteration: u64,
    /// Whether this is a periodic or the final snapshot.
    pub kind: SnapshotKind,
}

/// Consumer of emitted snapshots.
///
/// The bitmap writer in `scree-render` implements this; tests use
/// recording sinks, and [`DiscardSink`] serves pure-compute runs.
pub trait SnapshotSink {
    /// Consume one snapshot.
    fn emit(&mut self, snapshot: Snapshot<'_>) -> Result<(), SnapshotError>;
}

/// A sink that drops every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl SnapshotSink for DiscardSink {
    fn emit(&mut self, _snapshot: Snapshot<'_>) -> Result<(), SnapshotError> {
        Ok(())
    }
}
