//! Temporary file pool.
//!
//! `Files` is the base pool; `WithExtension` and `KeepAlive` decorate any
//! provider; `Mutexed` shares a base pool between threads; `create` turns an
//! allocated path into a real empty file.
//!
//! Typical use:
//!   let mut pool = Files::from_config(&cfg)?;
//!   let file = create(&mut pool)?;
//!   // ... reopen and write `file.path()` ...
//!   pool.release(file.into_path_buf());
//!   pool.destroy()?;

mod create;
mod extension;
mod files;
mod keep_alive;
mod mutexed;

pub use create::create;
pub use extension::WithExtension;
pub use files::Files;
pub use keep_alive::KeepAlive;
pub use mutexed::Mutexed;

use std::path::PathBuf;

use crate::errors::Result;

/// Capability set shared by the pool and its decorators.
pub trait TempFiles {
    /// Reserve a path for exclusive use, reusing a released one when possible.
    /// The file itself is not created; see [`create`].
    fn allocate(&mut self) -> Result<PathBuf>;

    /// Return a path for reuse. Releasing the same path twice is a no-op.
    fn release(&mut self, path: PathBuf);

    /// Remove the backing directory and everything in it.
    fn destroy(&mut self) -> Result<()>;
}

impl<P: TempFiles + ?Sized> TempFiles for &mut P {
    fn allocate(&mut self) -> Result<PathBuf> {
        (**self).allocate()
    }

    fn release(&mut self, path: PathBuf) {
        (**self).release(path);
    }

    fn destroy(&mut self) -> Result<()> {
        (**self).destroy()
    }
}

impl<P: TempFiles + ?Sized> TempFiles for Box<P> {
    fn allocate(&mut self) -> Result<PathBuf> {
        (**self).allocate()
    }

    fn release(&mut self, path: PathBuf) {
        (**self).release(path);
    }

    fn destroy(&mut self) -> Result<()> {
        (**self).destroy()
    }
}
