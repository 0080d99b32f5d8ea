//! Extension-enforcing decorator.
//! Guarantees every allocated path ends in `.<ext>`.
//!
//! When the inner candidate lacks the extension, `.<ext>` is appended, the new
//! path is touched on disk, and the bare candidate is discarded: it is not
//! released back (the inner pool would hand it out again and derive the same
//! suffixed path while it may still be checked out) but removed from disk if
//! something created it.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::TempFiles;
use crate::errors::{PoolError, Result};
use crate::fs_ops::{add_extension, has_extension, io_error_with_help_io, touch};

#[derive(Debug)]
pub struct WithExtension<P> {
    inner: P,
    extension: String,
}

impl<P: TempFiles> WithExtension<P> {
    /// Wrap `inner`; a leading dot on `extension` is ignored ("png" == ".png").
    pub fn new(inner: P, extension: impl Into<String>) -> Self {
        let mut extension = extension.into();
        if extension.starts_with('.') {
            extension.remove(0);
        }
        Self { inner, extension }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: TempFiles> TempFiles for WithExtension<P> {
    fn allocate(&mut self) -> Result<PathBuf> {
        let candidate = self.inner.allocate()?;
        if self.extension.is_empty() || has_extension(&candidate, &self.extension) {
            return Ok(candidate);
        }

        let with_ext = add_extension(&candidate, &self.extension);
        if let Err(source) = touch(&with_ext) {
            // The suffixed path was never handed out, so the candidate is still good.
            self.inner.release(candidate);
            return Err(PoolError::Touch {
                path: with_ext,
                source,
            });
        }

        match fs::remove_file(&candidate) {
            Ok(()) => debug!(path = %candidate.display(), "Removed discarded candidate"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(
                    path = %candidate.display(),
                    error = %e,
                    "Could not remove discarded candidate"
                );
                if let Err(cleanup) = fs::remove_file(&with_ext) {
                    warn!(
                        path = %with_ext.display(),
                        error = %cleanup,
                        "Could not remove suffixed path"
                    );
                }
                return Err(PoolError::OrphanRemoval {
                    path: candidate.clone(),
                    source: io_error_with_help_io("remove candidate", &candidate)(e),
                });
            }
        }
        Ok(with_ext)
    }

    fn release(&mut self, path: PathBuf) {
        self.inner.release(path);
    }

    fn destroy(&mut self) -> Result<()> {
        self.inner.destroy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Files;
    use crate::rng::RandomSource;
    use tempfile::tempdir;

    struct Fixed(u64);

    impl RandomSource for Fixed {
        fn next_name(&mut self) -> u64 {
            self.0
        }
    }

    #[test]
    fn appends_and_touches() {
        let td = tempdir().unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(7)), ".png");
        assert_eq!(pool.extension(), "png");
        let p = pool.allocate().unwrap();
        assert_eq!(p, td.path().join("7.png"));
        assert!(p.is_file());
    }

    #[test]
    fn matching_candidate_is_returned_unchanged() {
        let td = tempdir().unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(7)), "png");
        let reused = td.path().join("old.png");
        pool.release(reused.clone());
        assert_eq!(pool.allocate().unwrap(), reused);
        assert!(!reused.exists(), "no touch when the extension already matches");
    }

    #[test]
    fn orphan_is_removed_and_not_released() {
        let td = tempdir().unwrap();
        let bare = td.path().join("7");
        fs::write(&bare, b"left over").unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(7)), "png");
        let p = pool.allocate().unwrap();
        assert_eq!(p, td.path().join("7.png"));
        assert!(!bare.exists());
        assert_eq!(pool.inner().available_len(), 0);
    }

    #[test]
    fn empty_extension_passes_through() {
        let td = tempdir().unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(3)), "");
        assert_eq!(pool.allocate().unwrap(), td.path().join("3"));
    }

    #[test]
    fn touch_failure_is_touch_error() {
        let td = tempdir().unwrap();
        let missing_root = td.path().join("gone");
        let mut pool = WithExtension::new(Files::from_dir(&missing_root, Fixed(1)), "png");
        let err = pool.allocate().unwrap_err();
        assert!(matches!(err, PoolError::Touch { .. }));
        assert_eq!(err.path(), missing_root.join("1.png"));
    }

    #[test]
    fn touch_failure_returns_candidate_to_inner_pool() {
        let td = tempdir().unwrap();
        let reused = td.path().join("missing_dir").join("held");
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(1)), "png");
        pool.release(reused.clone());

        let err = pool.allocate().unwrap_err();
        assert!(matches!(err, PoolError::Touch { .. }));
        assert!(pool.inner().is_available(&reused));
        assert_eq!(pool.inner().available_len(), 1);
    }

    #[test]
    fn orphan_removal_failure_cleans_up_suffixed_file() {
        let td = tempdir().unwrap();
        // remove_file on a directory fails with something other than NotFound
        let candidate = td.path().join("a_dir");
        fs::create_dir(&candidate).unwrap();
        fs::write(candidate.join("inside"), b"x").unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(1)), "png");
        pool.release(candidate.clone());

        let err = pool.allocate().unwrap_err();
        assert!(matches!(err, PoolError::OrphanRemoval { .. }));
        assert_eq!(err.path(), candidate);
        assert!(!td.path().join("a_dir.png").exists());
        assert!(candidate.is_dir());
    }

    #[test]
    fn multi_dot_extension_is_reused() {
        let td = tempdir().unwrap();
        let mut pool = WithExtension::new(Files::from_dir(td.path(), Fixed(9)), "tar.gz");
        let first = pool.allocate().unwrap();
        assert_eq!(first, td.path().join("9.tar.gz"));
        for _ in 0..3 {
            pool.release(first.clone());
            assert_eq!(pool.allocate().unwrap(), first);
            assert!(first.is_file(), "released file must survive reuse");
        }
    }
}
