//! Error handling for TurtleKit.
//!
//! The core geometry and turtle operations have no failure modes: any
//! numeric input flows through floating-point arithmetic unchecked. Errors
//! exist only at the rendering/I-O boundary, and all types here use
//! `thiserror` for ergonomic handling.

use std::path::PathBuf;

use thiserror::Error;

/// Rendering and artifact-persistence error type.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The rendered document could not be written to disk.
    #[error("Failed to write rendered document to {path}: {source}")]
    WriteFailed {
        /// Destination the write was attempted against.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external viewer could not be launched.
    ///
    /// Callers are expected to treat this as best-effort and log it rather
    /// than abort the run.
    #[error("Failed to launch viewer for {path}: {reason}")]
    ViewerLaunch {
        /// The artifact the viewer was asked to open.
        path: PathBuf,
        /// Why the launch failed.
        reason: String,
    },
}

/// Main error type for TurtleKit.
#[derive(Error, Debug)]
pub enum Error {
    /// Rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
