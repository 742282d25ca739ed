//! Render output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the rendered artifact goes and whether to hand it to a viewer.
///
/// Passed explicitly by the caller so tests can point the output anywhere
/// (or at a no-op sink) instead of relying on baked-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Destination file for the rendered document. Overwritten if present.
    pub output_path: PathBuf,
    /// Attempt to open the artifact with an external viewer after writing.
    pub auto_open: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.svg"),
            auto_open: false,
        }
    }
}

impl RenderConfig {
    /// Config writing to the given path, viewer disabled.
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: path.into(),
            auto_open: false,
        }
    }

    /// Enables or disables the viewer launch.
    pub fn with_auto_open(mut self, auto_open: bool) -> Self {
        self.auto_open = auto_open;
        self
    }
}
