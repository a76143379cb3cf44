//! Error types for snapshot rendering.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while encoding or writing bitmaps.
#[derive(Debug)]
pub enum RenderError {
    /// An I/O error occurred while writing image data.
    Io(io::Error),
    /// The output directory could not be erased or recreated.
    OutputDir {
        /// The directory being prepared.
        path: PathBuf,
        /// The underlying filesystem error.
        source: io::Error,
    },
    /// The cropped image does not fit the BMP format's signed 32-bit
    /// dimension fields.
    ImageTooLarge {
        /// Cropped width in pixels.
        width: usize,
        /// Cropped height in pixels.
        height: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OutputDir { path, source } => {
                write!(f, "preparing output directory {}: {source}", path.display())
            }
            Self::ImageTooLarge { width, height } => {
                write!(f, "cropped image {width}x{height} exceeds BMP limits")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OutputDir { source, .. } => Some(source),
            Self::ImageTooLarge { .. } => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
