//! The command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scree::engine::TransferRule;

/// Abelian sandpile simulator: topples an initial sand configuration
/// until it stabilizes and renders indexed-color bitmaps along the way.
#[derive(Debug, Parser)]
#[command(name = "scree", version, about, long_about = None)]
pub struct Args {
    /// Input file of whitespace-separated `x y sand` triples.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Filename prefix for rendered snapshots.
    #[arg(short = 'o', long = "output", value_name = "PREFIX")]
    pub output: String,

    /// Maximum number of topple passes; 0 runs until stable.
    #[arg(short = 'm', long = "max-iter", value_name = "N", default_value_t = 0)]
    pub max_iter: u64,

    /// Render a snapshot every N passes; 0 renders only the final state.
    #[arg(short = 'f', long = "freq", value_name = "N", default_value_t = 0)]
    pub freq: u64,

    /// Transfer rule applied by each topple pass.
    #[arg(long = "rule", value_enum, default_value_t = RuleArg::Division)]
    pub rule: RuleArg,

    /// Directory receiving the bitmaps; erased and recreated per run.
    #[arg(long = "out-dir", value_name = "DIR", default_value = "BMP_PHOTOS")]
    pub out_dir: PathBuf,
}

/// Command-line spelling of [`TransferRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    /// A toppling cell keeps `n % 4` and sends `n / 4` to each neighbour.
    Division,
    /// A toppling cell keeps `n - 4` and sends 1 to each neighbour.
    Subtraction,
}

impl From<RuleArg> for TransferRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Division => TransferRule::Division,
            RuleArg::Subtraction => TransferRule::Subtraction,
        }
    }
}
