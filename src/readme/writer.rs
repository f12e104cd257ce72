//! README persistence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Write `content` to `path`, replacing any existing content
///
/// The destination is opened and truncated in place, so its permissions are
/// honored and a symlinked README keeps pointing at its target. Parent
/// directories are not created.
///
/// # Errors
///
/// Returns an error if the destination cannot be opened for writing (missing
/// parent, permission denied, path is a directory) or the write fails.
pub fn write_readme(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
