//! Core library for `tempfiles`.
//!
//! A pool of reusable temporary files inside one private scratch directory.
//! Paths are allocated, released for reuse instead of being deleted, and the
//! whole directory is removed when the pool is destroyed.
//!
//! Layout:
//! - `pool`: the base pool (`Files`), decorators, the mutex wrapper and `create`
//! - `fs_ops`: directory/file helpers and `VerifiedFile`
//! - `rng`: pluggable random name sources
//! - `config`, `logging`: ambient setup for embedding programs

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod pool;
pub mod rng;

pub use config::{LogLevel, PoolConfig, load_config_from_xml};
pub use errors::{PoolError, Result};
pub use fs_ops::VerifiedFile;
pub use pool::{Files, KeepAlive, Mutexed, TempFiles, WithExtension, create};
pub use rng::RandomSource;
