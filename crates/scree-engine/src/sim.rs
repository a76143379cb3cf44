//! The simulation state machine.
//!
//! [`Simulation`] owns the grid for the lifetime of a run and drives
//! stability check → expansion → topple until the grid stabilizes or the
//! iteration cap is reached, emitting snapshots through a
//! [`SnapshotSink`] at the configured cadence.
//!
//! # Ownership model
//!
//! The grid has a single owner — the simulation — for the whole run.
//! [`Snapshot`]s borrow it, so the borrow checker rules out stepping
//! while a snapshot is being consumed; there is no aliasing of grid
//! state between iterations.

use scree_grid::Grid;

use crate::config::{ConfigError, SimConfig};
use crate::error::SimError;
use crate::expansion::expand_if_border_unstable;
use crate::metrics::RunMetrics;
use crate::snapshot::{Snapshot, SnapshotKind, SnapshotSink};
use crate::stability::is_stable;
use crate::topple::topple;

/// Lifecycle state of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The grid may still contain unstable cells; passes continue.
    Running,
    /// Every cell is below the topple threshold; the run is finished.
    Stable,
    /// The iteration cap was reached before the grid stabilized.
    CappedOut,
}

/// Outcome and counters of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Terminal state: [`RunState::Stable`] or [`RunState::CappedOut`].
    pub outcome: RunState,
    /// Total completed topple passes.
    pub iterations: u64,
    /// Counters accumulated across the run.
    pub metrics: RunMetrics,
}

/// Single-owner sandpile simulation.
///
/// # Examples
///
/// ```
/// use scree_engine::{DiscardSink, RunState, SimConfig, Simulation};
/// use scree_grid::{CellRecord, GridBuilder};
///
/// let mut builder = GridBuilder::new();
/// builder.insert(CellRecord { x: 0, y: 0, sand: 16 });
/// let grid = builder.build().unwrap();
///
/// let mut sim = Simulation::new(grid, SimConfig::default()).unwrap();
/// let report = sim.run(&mut DiscardSink).unwrap();
/// assert_eq!(report.outcome, RunState::Stable);
/// assert!(sim.grid().cells().iter().all(|&sand| sand < 4));
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    config: SimConfig,
    state: RunState,
    iterations: u64,
    metrics: RunMetrics,
}

impl Simulation {
    /// Create a simulation over an initial grid.
    ///
    /// Validates the configuration against the grid: an extent ceiling
    /// smaller than the initial extent is rejected up front.
    pub fn new(grid: Grid, config: SimConfig) -> Result<Self, ConfigError> {
        if let Some(extent) = config.max_extent {
            if grid.width() > extent || grid.height() > extent {
                return Err(ConfigError::ExtentBelowGrid {
                    extent,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        let metrics = RunMetrics {
            peak_width: grid.width(),
            peak_height: grid.height(),
            ..RunMetrics::default()
        };
        Ok(Self {
            grid,
            config,
            state: RunState::Running,
            iterations: 0,
            metrics,
        })
    }

    /// The grid as of the most recent pass.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Completed topple passes so far.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Advance one tick without emitting snapshots.
    ///
    /// If the simulation halts on this tick (stable grid, or cap
    /// reached), the halting state is returned and no pass runs;
    /// otherwise one expansion check plus one topple pass execute and
    /// `Running` is returned. A halted simulation stays halted.
    pub fn step(&mut self) -> Result<RunState, SimError> {
        if let Some(halted) = self.poll_halt() {
            return Ok(halted);
        }
        self.advance()?;
        Ok(RunState::Running)
    }

    /// Drive the simulation until it halts, emitting snapshots.
    ///
    /// Periodic snapshots are emitted before the pass whenever the
    /// cadence divides the iteration count (so cadence N emits at
    /// iterations 0, N, 2N, ...); a cadence of 0 disables them. Exactly
    /// one [`SnapshotKind::Final`] snapshot is emitted after the loop
    /// halts, for either halting state. Calling `run` again on a halted
    /// simulation re-emits only the final snapshot.
    pub fn run(&mut self, sink: &mut dyn SnapshotSink) -> Result<RunReport, SimError> {
        loop {
            if self.poll_halt().is_some() {
                break;
            }
            let every = self.config.snapshot_every;
            if every != 0 && self.iterations % every == 0 {
                self.emit(sink, SnapshotKind::Periodic)?;
            }
            self.advance()?;
        }
        self.emit(sink, SnapshotKind::Final)?;
        Ok(RunReport {
            outcome: self.state,
            iterations: self.iterations,
            metrics: self.metrics.clone(),
        })
    }

    /// Decide whether the run halts here. Stability wins over the cap,
    /// so a grid that stabilizes exactly at the cap reports `Stable`.
    fn poll_halt(&mut self) -> Option<RunState> {
        if self.state != RunState::Running {
            return Some(self.state);
        }
        if is_stable(&self.grid) {
            self.state = RunState::Stable;
            return Some(self.state);
        }
        let cap = self.config.max_iterations;
        if cap != 0 && self.iterations >= cap {
            self.state = RunState::CappedOut;
            return Some(self.state);
        }
        None
    }

    /// One expansion check plus one topple pass.
    fn advance(&mut self) -> Result<(), SimError> {
        if expand_if_border_unstable(&mut self.grid) {
            self.metrics.expansions += 1;
            self.metrics.peak_width = self.metrics.peak_width.max(self.grid.width());
            self.metrics.peak_height = self.metrics.peak_height.max(self.grid.height());
            if let Some(limit) = self.config.max_extent {
                if self.grid.width() > limit || self.grid.height() > limit {
                    return Err(SimError::ExtentExceeded {
                        width: self.grid.width(),
                        height: self.grid.height(),
                        limit,
                    });
                }
            }
        }
        let pass = topple(&self.grid, self.config.rule);
        self.grid = pass.grid;
        self.metrics.topple_passes += 1;
        self.metrics.toppled_cells += pass.toppled_cells;
        self.metrics.grains_moved += pass.grains_moved;
        self.iterations += 1;
        Ok(())
    }

    fn emit(&self, sink: &mut dyn SnapshotSink, kind: SnapshotKind) -> Result<(), SimError> {
        sink.emit(Snapshot {
            grid: &self.grid,
            iteration: self.iterations,
            kind,
        })
        .map_err(|reason| SimError::SnapshotFailed {
            iteration: self.iterations,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::TransferRule;
    use crate::snapshot::DiscardSink;
    use scree_grid::{CellRecord, GridBuilder};

    fn single_pile(sand: u64) -> Grid {
        let mut builder = GridBuilder::new();
        builder.insert(CellRecord { x: 0, y: 0, sand });
        builder.build().unwrap()
    }

    fn config(max_iterations: u64) -> SimConfig {
        SimConfig {
            max_iterations,
            ..SimConfig::default()
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn new_starts_running_at_iteration_zero() {
        let sim = Simulation::new(single_pile(4), SimConfig::default()).unwrap();
        assert_eq!(sim.state(), RunState::Running);
        assert_eq!(sim.iterations(), 0);
        assert_eq!(sim.metrics().peak_width, 1);
    }

    #[test]
    fn stable_input_halts_without_a_pass() {
        let mut sim = Simulation::new(single_pile(3), SimConfig::default()).unwrap();
        assert_eq!(sim.step().unwrap(), RunState::Stable);
        assert_eq!(sim.iterations(), 0);
        assert_eq!(sim.metrics().topple_passes, 0);
    }

    #[test]
    fn halted_simulation_stays_halted() {
        let mut sim = Simulation::new(single_pile(0), SimConfig::default()).unwrap();
        assert_eq!(sim.step().unwrap(), RunState::Stable);
        assert_eq!(sim.step().unwrap(), RunState::Stable);
        assert_eq!(sim.iterations(), 0);
    }

    #[test]
    fn step_expands_and_topples() {
        let mut sim = Simulation::new(single_pile(4), SimConfig::default()).unwrap();
        assert_eq!(sim.step().unwrap(), RunState::Running);
        assert_eq!(sim.iterations(), 1);
        assert_eq!(sim.grid().width(), 3);
        assert_eq!(sim.grid().sand_at(0, 0), Some(0));
        assert_eq!(sim.grid().sand_at(1, 0), Some(1));
        assert_eq!(sim.step().unwrap(), RunState::Stable);
    }

    #[test]
    fn run_reaches_stability() {
        let mut sim = Simulation::new(single_pile(1000), SimConfig::default()).unwrap();
        let report = sim.run(&mut DiscardSink).unwrap();
        assert_eq!(report.outcome, RunState::Stable);
        assert!(report.iterations > 0);
        assert!(sim.grid().cells().iter().all(|&sand| sand < 4));
        // Sand only moved, never appeared or vanished.
        assert_eq!(sim.grid().total_sand(), 1000);
    }

    #[test]
    fn cap_halts_after_exact_pass_count() {
        let mut sim = Simulation::new(single_pile(1_000_000), config(5)).unwrap();
        let report = sim.run(&mut DiscardSink).unwrap();
        assert_eq!(report.outcome, RunState::CappedOut);
        assert_eq!(report.iterations, 5);
        assert_eq!(report.metrics.topple_passes, 5);
        assert!(!is_stable(sim.grid()));
    }

    #[test]
    fn stability_wins_over_cap() {
        // 4 grains stabilize in exactly one pass; cap of 1 must still
        // report Stable.
        let mut sim = Simulation::new(single_pile(4), config(1)).unwrap();
        let report = sim.run(&mut DiscardSink).unwrap();
        assert_eq!(report.outcome, RunState::Stable);
        assert_eq!(report.iterations, 1);
    }

    #[test]
    fn subtraction_rule_reaches_same_stable_grid() {
        let mut division = Simulation::new(single_pile(64), SimConfig::default()).unwrap();
        let mut subtraction = Simulation::new(
            single_pile(64),
            SimConfig {
                rule: TransferRule::Subtraction,
                ..SimConfig::default()
            },
        )
        .unwrap();
        division.run(&mut DiscardSink).unwrap();
        subtraction.run(&mut DiscardSink).unwrap();

        // The Abelian property: both rules settle into one configuration.
        for y in -10..=10 {
            for x in -10..=10 {
                assert_eq!(
                    division.grid().sand_at(x, y).unwrap_or(0),
                    subtraction.grid().sand_at(x, y).unwrap_or(0),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    // ── Extent ceiling ──────────────────────────────────────────

    #[test]
    fn ceiling_below_initial_grid_is_rejected() {
        let grid = {
            let mut builder = GridBuilder::new();
            builder.insert(CellRecord { x: 0, y: 0, sand: 1 });
            builder.insert(CellRecord { x: 9, y: 0, sand: 1 });
            builder.build().unwrap()
        };
        let result = Simulation::new(
            grid,
            SimConfig {
                max_extent: Some(5),
                ..SimConfig::default()
            },
        );
        assert!(matches!(result, Err(ConfigError::ExtentBelowGrid { .. })));
    }

    #[test]
    fn growth_past_ceiling_aborts_the_run() {
        let mut sim = Simulation::new(
            single_pile(1_000_000),
            SimConfig {
                max_extent: Some(7),
                ..SimConfig::default()
            },
        )
        .unwrap();
        let result = sim.run(&mut DiscardSink);
        assert!(matches!(
            result,
            Err(SimError::ExtentExceeded { limit: 7, .. })
        ));
    }
}
