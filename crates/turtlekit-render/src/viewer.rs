//! External viewer launching.
//!
//! Opening the rendered artifact is a single abstract capability supplied by
//! this platform layer; nothing elsewhere in the workspace encodes an
//! OS-specific command name.

use std::path::Path;
use std::process::Command;

use turtlekit_core::error::{RenderError, Result};

/// Capability to hand an artifact to whatever viewer the platform offers.
pub trait ViewerLauncher {
    /// Attempts to open the artifact. Best effort: callers log a failure
    /// and continue rather than aborting the run.
    fn open(&self, path: &Path) -> Result<()>;
}

/// Launcher using the platform's standard "open this file" command.
#[derive(Debug, Default)]
pub struct SystemViewer;

#[cfg(target_os = "macos")]
const OPEN_COMMAND: &[&str] = &["open"];
#[cfg(target_os = "windows")]
const OPEN_COMMAND: &[&str] = &["cmd", "/C", "start", ""];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPEN_COMMAND: &[&str] = &["xdg-open"];

impl ViewerLauncher for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new(OPEN_COMMAND[0])
            .args(&OPEN_COMMAND[1..])
            .arg(path)
            .status()
            .map_err(|e| RenderError::ViewerLaunch {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(RenderError::ViewerLaunch {
                path: path.to_path_buf(),
                reason: format!("viewer exited with {}", status),
            }
            .into());
        }
        Ok(())
    }
}

/// Launcher that does nothing. Stands in for the real viewer in tests and
/// headless environments.
#[derive(Debug, Default)]
pub struct NoopViewer;

impl ViewerLauncher for NoopViewer {
    fn open(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
