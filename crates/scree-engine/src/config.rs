//! Simulation configuration and validation.

use std::error::Error;
use std::fmt;

use crate::rule::TransferRule;

/// Complete configuration for a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Transfer rule applied by every topple pass.
    pub rule: TransferRule,
    /// Maximum number of topple passes; 0 means run until stable.
    pub max_iterations: u64,
    /// Emit a periodic snapshot every N passes; 0 disables them.
    pub snapshot_every: u64,
    /// Hard ceiling on either grid dimension; `None` means unbounded.
    ///
    /// The grid can grow on every pass, so memory use is unbounded in
    /// principle; a ceiling turns runaway growth into a reported error
    /// instead of an allocation failure.
    pub max_extent: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rule: TransferRule::default(),
            max_iterations: 0,
            snapshot_every: 0,
            max_extent: None,
        }
    }
}

/// Errors detected when a configuration is checked against the initial
/// grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The extent ceiling is already smaller than the initial grid.
    ExtentBelowGrid {
        /// The configured ceiling.
        extent: usize,
        /// Initial grid width.
        width: usize,
        /// Initial grid height.
        height: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtentBelowGrid {
                extent,
                width,
                height,
            } => {
                write!(
                    f,
                    "extent ceiling {extent} is below the initial grid ({width}x{height})"
                )
            }
        }
    }
}

impl Error for ConfigError {}
