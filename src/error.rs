//! Error types for foldersize
//!
//! Scanning itself never fails: an unresolvable root is reported as absent
//! and filesystem irregularities below the root are skipped. Errors only
//! arise when reporting, from a missing root or a failed write.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reporting folders.
#[derive(Error, Debug)]
pub enum Error {
    /// A root path does not resolve to an existing folder
    #[error("Folder does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// Writing the report failed
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the reader of our output went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias for reporting operations.
pub type Result<T> = std::result::Result<T, Error>;
