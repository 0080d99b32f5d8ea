//! Keep-alive decorator: everything passes through except `destroy`, which
//! succeeds without removing anything. Lets a borrowed or shared pool be
//! handed to code that tears down what it is given.

use std::path::PathBuf;
use tracing::trace;

use super::TempFiles;
use crate::errors::Result;

#[derive(Debug)]
pub struct KeepAlive<P> {
    inner: P,
}

impl<P: TempFiles> KeepAlive<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Get the wrapped provider back, e.g. to destroy it for real.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: TempFiles> TempFiles for KeepAlive<P> {
    fn allocate(&mut self) -> Result<PathBuf> {
        self.inner.allocate()
    }

    fn release(&mut self, path: PathBuf) {
        self.inner.release(path);
    }

    fn destroy(&mut self) -> Result<()> {
        trace!("destroy suppressed by KeepAlive");
        Ok(())
    }
}
