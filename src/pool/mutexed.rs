//! Mutex-guarded pool for use from several threads.
//! The lock covers one bookkeeping operation at a time and is never held
//! while a caller touches the file itself.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::TempFiles;
use super::files::Files;
use crate::errors::Result;

#[derive(Debug)]
pub struct Mutexed {
    files: Mutex<Files>,
    // Fixed for the pool's lifetime, so readable without the lock.
    root_dir: PathBuf,
}

impl Mutexed {
    pub fn new(files: Files) -> Self {
        let root_dir = files.root_dir().to_path_buf();
        Self {
            files: Mutex::new(files),
            root_dir,
        }
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn lock(&self) -> MutexGuard<'_, Files> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reserve a path, reusing a released one when possible.
    pub fn allocate(&self) -> Result<PathBuf> {
        self.lock().allocate()
    }

    /// Reuse-only lookup; never synthesizes a new path.
    pub fn search(&self) -> Option<PathBuf> {
        self.lock().search()
    }

    /// Return a path for reuse.
    pub fn release(&self, path: PathBuf) {
        self.lock().release(path);
    }

    /// Remove the backing directory.
    pub fn destroy(&self) -> Result<()> {
        self.lock().destroy()
    }

    pub fn available_len(&self) -> usize {
        self.lock().available_len()
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn into_inner(self) -> Files {
        self.files.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Files> for Mutexed {
    fn from(files: Files) -> Self {
        Self::new(files)
    }
}

/// Shared handle usable with [`super::create`] and the decorators from any thread.
impl TempFiles for &Mutexed {
    fn allocate(&mut self) -> Result<PathBuf> {
        Mutexed::allocate(self)
    }

    fn release(&mut self, path: PathBuf) {
        Mutexed::release(self, path);
    }

    fn destroy(&mut self) -> Result<()> {
        Mutexed::destroy(self)
    }
}
