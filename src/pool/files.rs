//! Base pool: one scratch directory, a set of paths available for reuse, and
//! a random source for naming new files.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::TempFiles;
use super::mutexed::Mutexed;
use crate::config::PoolConfig;
use crate::errors::Result;
use crate::fs_ops::{remove_dir, temp_dir_in};
use crate::rng::{self, RandomSource};

/// Manages temporary files in a single directory.
///
/// Paths handed out by [`Files::allocate`] are only reserved; nothing is
/// created on disk until the caller (or [`super::create`]) does so.
pub struct Files {
    root_dir: PathBuf,
    // Paths issued earlier and released; none of them is checked out.
    available: HashSet<PathBuf>,
    rng: Box<dyn RandomSource>,
}

impl fmt::Debug for Files {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Files")
            .field("root_dir", &self.root_dir)
            .field("available", &self.available.len())
            .finish_non_exhaustive()
    }
}

impl Files {
    /// Manage an existing directory. Nothing is created.
    pub fn from_dir(root_dir: impl Into<PathBuf>, rng: impl RandomSource + 'static) -> Self {
        Self {
            root_dir: root_dir.into(),
            available: HashSet::new(),
            rng: Box::new(rng),
        }
    }

    /// Create a fresh directory under `parent` (None or empty = system temp dir)
    /// whose name starts with `prefix`, and manage it.
    pub fn in_dir(
        parent: Option<&Path>,
        prefix: &str,
        rng: impl RandomSource + 'static,
    ) -> Result<Self> {
        let root = temp_dir_in(parent, prefix)?;
        Ok(Self::from_dir(root, rng))
    }

    /// Like [`Files::in_dir`] in the system temp dir, with the prefix drawn from `rng`.
    pub fn from_rng(mut rng: impl RandomSource + 'static) -> Result<Self> {
        let prefix = rng.next_name().to_string();
        Self::in_dir(None, &prefix, rng)
    }

    /// Clock-seeded names in a fresh directory under the system temp dir.
    pub fn with_defaults() -> Result<Self> {
        Self::from_rng(rng::time_seeded())
    }

    /// Build a pool from an explicit configuration.
    pub fn from_config(cfg: &PoolConfig) -> Result<Self> {
        let mut source = match cfg.seed {
            Some(seed) => rng::seeded(seed),
            None => rng::time_seeded(),
        };
        let prefix = match cfg.prefix.as_deref() {
            Some(p) => p.to_owned(),
            None => source.next_name().to_string(),
        };
        Self::in_dir(cfg.parent_dir.as_deref(), &prefix, source)
    }

    /// Guard the pool with a mutex for use from several threads.
    pub fn mutexed(self) -> Mutexed {
        Mutexed::new(self)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Number of paths currently available for reuse.
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    pub fn is_available(&self, path: &Path) -> bool {
        self.available.contains(path)
    }

    /// Take any available path out of the set. No ordering is implied.
    pub fn search(&mut self) -> Option<PathBuf> {
        let path = self.available.iter().next().cloned()?;
        self.available.remove(&path);
        trace!(path = %path.display(), "Reusing released path");
        Some(path)
    }

    /// Synthesize a new path `<root>/<decimal random>`. Existence is not checked.
    pub fn new_path(&mut self) -> PathBuf {
        let path = self.root_dir.join(self.rng.next_name().to_string());
        trace!(path = %path.display(), "Synthesized new path");
        path
    }
}

impl TempFiles for Files {
    fn allocate(&mut self) -> Result<PathBuf> {
        Ok(self.search().unwrap_or_else(|| self.new_path()))
    }

    fn release(&mut self, path: PathBuf) {
        self.available.insert(path);
    }

    fn destroy(&mut self) -> Result<()> {
        debug!(
            root = %self.root_dir.display(),
            available = self.available.len(),
            "Destroying pool"
        );
        remove_dir(&self.root_dir)?;
        self.available.clear();
        Ok(())
    }
}
