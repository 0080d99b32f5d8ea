//! I/O helper utilities.
//!
//! Small adapters that enrich io::Error with the operation, the path and an
//! actionable hint, usable with map_err in both io::Result and anyhow::Result code.
//!
//! Usage:
//!   // inside the pool (the kind must survive for callers to inspect)
//!   fs::remove_dir_all(root).map_err(io_error_with_help_io("remove pool dir", root))?;
//!
//!   // in config validation (anyhow)
//!   fs::read_dir(dir).map_err(io_error_with_help("read parent dir", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" - permission denied; check ownership of the scratch directory.");
                }
                libc::ENOENT => {
                    msg.push_str(" - path not found; the pool directory may already be gone.");
                }
                libc::EEXIST => {
                    msg.push_str(" - already exists; another process may share the scratch directory.");
                }
                libc::ENOTDIR => {
                    msg.push_str(" - a path component is not a directory.");
                }
                libc::ENOSPC => {
                    msg.push_str(" - insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str(" - read-only filesystem; pick another parent directory.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" - filename or path too long; shorten the prefix or parent path.");
                }
                libc::EMFILE => {
                    msg.push_str(" - process file descriptor limit reached; close files or raise limits.");
                }
                libc::ENFILE => {
                    msg.push_str(" - system-wide file table overflow; reduce open files.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" - access denied; check permissions."), // ERROR_ACCESS_DENIED
                2 | 3 => msg.push_str(" - path not found; the pool directory may already be gone."),
                32 => msg.push_str(" - sharing violation; a temp file is still open."), // ERROR_SHARING_VIOLATION
                80 => msg.push_str(" - already exists; pick a unique name."), // ERROR_FILE_EXISTS
                112 => msg.push_str(" - insufficient disk space."), // ERROR_DISK_FULL
                206 => msg.push_str(" - filename or path too long (MAX_PATH exceeded)."),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        // Fallback to Kind-based hints
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" - permission denied; check ownership of the scratch directory.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" - path not found; the pool directory may already be gone.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" - already exists; another process may share the scratch directory.");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code.
/// The returned error keeps the original ErrorKind; only the message is enriched.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
