//! Snapshot-to-bitmap writing and the output directory lifecycle.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use scree_engine::{Snapshot, SnapshotError, SnapshotKind, SnapshotSink};

use crate::bmp::encode_bmp;
use crate::error::RenderError;

/// Writes emitted snapshots as BMP files under a dedicated directory.
///
/// [`create`](BmpSnapshotWriter::create) erases and recreates the
/// directory with explicit filesystem calls, so every run starts from an
/// empty output tree and a broken directory surfaces before the
/// simulation starts rather than at the first snapshot. Periodic
/// snapshots are named `<prefix><iteration>.bmp`; the final snapshot is
/// `<prefix>.bmp`.
#[derive(Clone, Debug)]
pub struct BmpSnapshotWriter {
    dir: PathBuf,
    prefix: String,
}

impl BmpSnapshotWriter {
    /// Recreate `dir` and return a writer placing files under it.
    pub fn create(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self, RenderError> {
        let dir = dir.into();
        if dir.exists() {
            fs::remove_dir_all(&dir).map_err(|source| RenderError::OutputDir {
                path: dir.clone(),
                source,
            })?;
        }
        fs::create_dir_all(&dir).map_err(|source| RenderError::OutputDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
        })
    }

    /// The directory receiving bitmaps.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target path for a snapshot at `iteration` of the given kind.
    pub fn path_for(&self, iteration: u64, kind: SnapshotKind) -> PathBuf {
        let name = match kind {
            SnapshotKind::Periodic => format!("{}{}.bmp", self.prefix, iteration),
            SnapshotKind::Final => format!("{}.bmp", self.prefix),
        };
        self.dir.join(name)
    }

    /// Encode one snapshot to its target path, returning the path.
    pub fn write(&self, snapshot: &Snapshot<'_>) -> Result<PathBuf, RenderError> {
        let path = self.path_for(snapshot.iteration, snapshot.kind);
        let file = fs::File::create(&path)?;
        let mut out = BufWriter::new(file);
        encode_bmp(&mut out, snapshot.grid)?;
        out.flush()?;
        Ok(path)
    }
}

impl SnapshotSink for BmpSnapshotWriter {
    fn emit(&mut self, snapshot: Snapshot<'_>) -> Result<(), SnapshotError> {
        self.write(&snapshot)
            .map(drop)
            .map_err(|e| SnapshotError::WriteFailed {
                reason: e.to_string(),
            })
    }
}
