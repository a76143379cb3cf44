//! Grid-evolution engine for the Scree sandpile simulator.
//!
//! The engine drives the Abelian sandpile rule over a
//! [`Grid`](scree_grid::Grid): a stability scan decides whether any cell
//! can still topple, the expansion policy keeps the active region
//! enclosed by a zero border, and the synchronous topple pass computes
//! the next state from a frozen snapshot of the current one. The
//! [`Simulation`] state machine ties these together and reports progress
//! through [`Snapshot`]s and [`RunMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod expansion;
pub mod metrics;
pub mod rule;
pub mod sim;
pub mod snapshot;
pub mod stability;
pub mod topple;

pub use config::{ConfigError, SimConfig};
pub use error::{SimError, SnapshotError};
pub use expansion::expand_if_border_unstable;
pub use metrics::RunMetrics;
pub use rule::{TransferRule, TOPPLE_THRESHOLD};
pub use sim::{RunReport, RunState, Simulation};
pub use snapshot::{DiscardSink, Snapshot, SnapshotKind, SnapshotSink};
pub use stability::is_stable;
pub use topple::{topple, TopplePass};
