//! Filesystem collaborator used by the pool.
//! Directory creation/removal, file touch/create, and verified handles.

mod dir;
mod file;
mod helpers;
mod verified;

pub use dir::{remove_dir, resolve_parent, temp_dir_in};
pub use file::{add_extension, create_truncate, has_extension, touch};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use verified::VerifiedFile;
