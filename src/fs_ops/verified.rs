//! Verified file handle.
//! A path that was confirmed to exist at the moment it was constructed.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::io_error_with_help_io;
use crate::errors::{PoolError, Result};

/// A path confirmed to exist on disk when the handle was built.
///
/// The check is a snapshot: the file may be removed afterwards. Call
/// [`VerifiedFile::must_exist`] to re-check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerifiedFile {
    path: PathBuf,
}

impl VerifiedFile {
    /// Verify `path` exists and wrap it.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        check_exists(&path)?;
        Ok(Self { path })
    }

    /// Re-check that the file still exists.
    pub fn must_exist(&self) -> Result<()> {
        check_exists(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.path.extension()
    }

    /// Drop the verification and hand the plain path back (e.g. for `release`).
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

fn check_exists(path: &Path) -> Result<()> {
    // symlink_metadata so a dangling link still counts as "there"
    fs::symlink_metadata(path)
        .map(|_| ())
        .map_err(io_error_with_help_io("verify", path))
        .map_err(|source| PoolError::Verification {
            path: path.to_path_buf(),
            source,
        })
}

impl AsRef<Path> for VerifiedFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<VerifiedFile> for PathBuf {
    fn from(v: VerifiedFile) -> Self {
        v.path
    }
}

impl fmt::Display for VerifiedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
