//! Error types for tensorsum

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using tensorsum's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while summarizing a tensor or emitting its summary
#[derive(Error, Debug)]
pub enum Error {
    /// Statistics were requested for a tensor with no elements
    #[error("Cannot summarize an empty tensor: min/max/mean/std are undefined for 0 elements")]
    EmptyInput,

    /// Shape does not describe the number of elements in the buffer
    #[error("Shape mismatch: shape {shape:?} does not describe a buffer of {len} elements")]
    ShapeMismatch {
        /// Requested shape
        shape: Vec<usize>,
        /// Actual buffer length
        len: usize,
    },

    /// Summary file could not be opened when the sink was constructed
    #[error("Failed to open summary file {}: {source}", path.display())]
    SinkOpen {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A summary record could not be written to an already open sink
    #[error("Failed to write summary record to {target}: {source}")]
    SinkWrite {
        /// Human-readable sink destination ("stdout", a file path, or a custom label)
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(shape: &[usize], len: usize) -> Self {
        Self::ShapeMismatch {
            shape: shape.to_vec(),
            len,
        }
    }

    /// Create a sink open error for `path`
    pub fn sink_open(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::SinkOpen {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a sink write error for the destination labelled `target`
    pub fn sink_write(target: impl Into<String>, source: io::Error) -> Self {
        Self::SinkWrite {
            target: target.into(),
            source,
        }
    }
}
