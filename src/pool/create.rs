//! Materialize an allocated path as a real, empty file.

use tracing::debug;

use super::TempFiles;
use crate::errors::{PoolError, Result};
use crate::fs_ops::{VerifiedFile, create_truncate};

/// Allocate a path from `provider`, create (or truncate) the file there,
/// verify it exists, close it, and return the verified handle.
///
/// With a [`super::Mutexed`] pool only the allocation runs under the lock;
/// file creation happens outside it.
pub fn create<P: TempFiles + ?Sized>(provider: &mut P) -> Result<VerifiedFile> {
    let path = provider.allocate()?;

    let file = create_truncate(&path).map_err(|source| PoolError::CreateFail {
        path: path.clone(),
        source,
    })?;
    let verified = VerifiedFile::new(path)?;
    drop(file);

    debug!(path = %verified, "Created temporary file");
    Ok(verified)
}
