//! Persistence of the rendered document.

use std::fs;
use std::path::Path;

use turtlekit_core::error::{RenderError, Result};

/// Destination for a rendered document.
///
/// The concrete sink used in production writes to disk; tests substitute an
/// in-memory implementation.
pub trait RenderSink {
    /// Writes the document, replacing any previous artifact at `path`.
    /// One attempt, no retry; the error is reported to the caller.
    fn write(&self, document: &str, path: &Path) -> Result<()>;
}

/// File-backed sink with plain overwrite semantics.
#[derive(Debug, Default)]
pub struct FileSink;

impl RenderSink for FileSink {
    fn write(&self, document: &str, path: &Path) -> Result<()> {
        fs::write(path, document).map_err(|source| RenderError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = document.len(), "wrote rendered document");
        Ok(())
    }
}
