//! Indexed-color bitmap rendering of sandpile snapshots.
//!
//! Consumes the engine's [`Snapshot`](scree_engine::Snapshot)s and writes
//! 4-bit indexed BMP images: sand counts clamp to a five-color palette,
//! the image is cropped to the bounding box of non-zero cells, and files
//! land in an output directory that is recreated per run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bmp;
pub mod error;
pub mod palette;
pub mod writer;

pub use bmp::{content_bounds, encode_bmp};
pub use error::RenderError;
pub use palette::{palette_index, PALETTE_BGRX};
pub use writer::BmpSnapshotWriter;
