//! errors.rs - Error types for the logclean-core library.
//!
//! The batch driver distinguishes recoverable per-item failures from
//! run-terminating ones by inspecting these variants instead of catching
//! control-flow exceptions.
//!
//! License: MIT OR Apache-2.0

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All failure modes of the core cleaning pipeline.
///
/// `NotFound` is the only recoverable variant: inside a batch the driver
/// skips the file and continues. Every other variant terminates the run.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanError {
    /// The file or directory vanished between discovery and processing,
    /// or a user-supplied path never existed.
    #[error("{}: file not found", .path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure while reading, writing, or renaming.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CleanError {
    /// Wraps an `io::Error` for `path`, mapping the not-found kind onto
    /// the recoverable variant.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            CleanError::NotFound { path }
        } else {
            CleanError::Io { path, source }
        }
    }

    /// True when the batch driver may skip this item and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CleanError::NotFound { .. })
    }
}
