//! Scratch directory lifecycle: create a uniquely named directory under a
//! parent, and remove it recursively.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::helpers::io_error_with_help_io;
use crate::errors::{PoolError, Result};

/// Resolve the parent directory: `None` or an empty path means the system temp dir.
pub fn resolve_parent(parent: Option<&Path>) -> PathBuf {
    match parent {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::temp_dir(),
    }
}

/// Create a fresh directory under `parent` whose name starts with `prefix`.
/// The directory is kept on disk; its removal is the caller's job.
pub fn temp_dir_in(parent: Option<&Path>, prefix: &str) -> Result<PathBuf> {
    let parent = resolve_parent(parent);
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(&parent)
        .map_err(io_error_with_help_io("create temp dir in", &parent))
        .map_err(|source| PoolError::DirectoryCreation {
            parent: parent.clone(),
            source,
        })?;
    let path = dir.keep();
    info!(path = %path.display(), "Created temporary directory");
    Ok(path)
}

/// Recursively remove `dir` and everything under it.
pub fn remove_dir(dir: &Path) -> Result<()> {
    fs::remove_dir_all(dir)
        .map_err(io_error_with_help_io("remove temp dir", dir))
        .map_err(|source| PoolError::DirectoryRemoval {
            path: dir.to_path_buf(),
            source,
        })?;
    debug!(path = %dir.display(), "Removed temporary directory");
    Ok(())
}
