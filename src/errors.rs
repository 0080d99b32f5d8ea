//! Typed error definitions for the temp file pool.
//! Every fallible pool operation returns one of these; the wrapped io::Error
//! carries op/path context and keeps its original ErrorKind.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for pool results.
pub type Result<T, E = PoolError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to create temporary directory under {parent}")]
    DirectoryCreation {
        parent: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create temporary file '{path}'")]
    CreateFail {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to touch '{path}'")]
    Touch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove discarded candidate '{path}'")]
    OrphanRemoval {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove temporary directory '{path}'")]
    DirectoryRemoval {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path '{path}' could not be verified to exist")]
    Verification {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PoolError {
    /// Stable numeric code, handy for structured log fields.
    pub fn code(&self) -> u16 {
        match self {
            PoolError::DirectoryCreation { .. } => 10,
            PoolError::CreateFail { .. } => 20,
            PoolError::Touch { .. } => 21,
            PoolError::OrphanRemoval { .. } => 22,
            PoolError::DirectoryRemoval { .. } => 30,
            PoolError::Verification { .. } => 40,
        }
    }

    /// Path the failed operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PoolError::DirectoryCreation { parent: path, .. }
            | PoolError::CreateFail { path, .. }
            | PoolError::Touch { path, .. }
            | PoolError::OrphanRemoval { path, .. }
            | PoolError::DirectoryRemoval { path, .. }
            | PoolError::Verification { path, .. } => path,
        }
    }

    /// Kind of the underlying io::Error.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            PoolError::DirectoryCreation { source, .. }
            | PoolError::CreateFail { source, .. }
            | PoolError::Touch { source, .. }
            | PoolError::OrphanRemoval { source, .. }
            | PoolError::DirectoryRemoval { source, .. }
            | PoolError::Verification { source, .. } => source.kind(),
        }
    }
}
