//! Config validation logic.
//! Verifies the parent directory exists and is writable, and that the prefix
//! is a plain name component.

use anyhow::{Result, bail};
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, error};

use super::types::PoolConfig;
use crate::fs_ops::{io_error_with_help, resolve_parent};

impl PoolConfig {
    /// Validate the parent directory and prefix before building a pool.
    pub fn validate(&self) -> Result<()> {
        let parent = resolve_parent(self.parent_dir.as_deref());
        ensure_dir_exists_and_is_dir(&parent)?;
        ensure_writable(&parent)?;

        if let Some(prefix) = self.prefix.as_deref() {
            ensure_plain_prefix(prefix)?;
        }

        debug!(parent = %parent.display(), prefix = ?self.prefix, "Config validated");
        Ok(())
    }
}

fn ensure_dir_exists_and_is_dir(dir: &Path) -> Result<()> {
    let meta = fs::metadata(dir).map_err(io_error_with_help("stat parent_dir", dir))?;
    if !meta.is_dir() {
        error!(path = %dir.display(), "parent_dir is not a directory");
        bail!("parent_dir is not a directory: {}", dir.display());
    }
    Ok(())
}

// Create and remove a probe file.
fn ensure_writable(dir: &Path) -> Result<()> {
    let probe = dir.join(format!(".tempfiles_probe_{}.tmp", std::process::id()));
    fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)
        .map_err(io_error_with_help("write probe in parent_dir", dir))?;
    let _ = fs::remove_file(&probe);
    Ok(())
}

fn ensure_plain_prefix(prefix: &str) -> Result<()> {
    let mut comps = Path::new(prefix).components();
    let plain = matches!((comps.next(), comps.next()), (Some(Component::Normal(_)), None));
    if !plain {
        bail!("prefix must be a single plain name component, got '{prefix}'");
    }
    Ok(())
}
