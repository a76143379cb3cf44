//! `scree` — Abelian sandpile simulator.
//!
//! Reads a sparse cell list, topples it until stable (or an iteration
//! cap), and writes indexed-color bitmaps of the evolving pile.

mod args;
mod input;

use anyhow::Context;
use clap::Parser;
use scree::engine::{SimConfig, Simulation};
use scree::grid::GridBuilder;
use scree::render::BmpSnapshotWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let args = args::Args::parse();

    let records = input::read_cells(&args.input)
        .with_context(|| format!("reading cell list {}", args.input.display()))?;
    let grid = records
        .into_iter()
        .collect::<GridBuilder>()
        .build()
        .with_context(|| format!("building the initial grid from {}", args.input.display()))?;
    info!(
        width = grid.width(),
        height = grid.height(),
        grains = %grid.total_sand(),
        "initial grid built"
    );

    let mut writer = BmpSnapshotWriter::create(&args.out_dir, args.output.as_str())
        .with_context(|| format!("preparing output directory {}", args.out_dir.display()))?;

    let config = SimConfig {
        rule: args.rule.into(),
        max_iterations: args.max_iter,
        snapshot_every: args.freq,
        max_extent: None,
    };
    let mut sim = Simulation::new(grid, config).context("configuring the simulation")?;
    let report = sim.run(&mut writer).context("running the simulation")?;

    info!(
        outcome = ?report.outcome,
        iterations = report.iterations,
        expansions = report.metrics.expansions,
        toppled_cells = report.metrics.toppled_cells,
        width = sim.grid().width(),
        height = sim.grid().height(),
        "simulation finished"
    );
    Ok(())
}
