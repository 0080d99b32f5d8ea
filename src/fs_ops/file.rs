//! Single-file helpers: touch, create-or-truncate, and extension suffixing.

use std::ffi::{OsStr, OsString};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::helpers::io_error_with_help_io;

/// Create `path` if missing; an existing file keeps its contents.
pub fn touch(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(io_error_with_help_io("touch", path))
}

/// Create `path`, truncating any previous contents. The handle is returned open.
pub fn create_truncate(path: &Path) -> io::Result<File> {
    File::create(path).map_err(io_error_with_help_io("create", path))
}

/// Append `.<ext>` to the full file name ("123" -> "123.png", "a.txt" -> "a.txt.png").
pub fn add_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// True when the file name ends in `.<ext>`; `ext` may contain dots ("tar.gz").
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let suffix = format!(".{ext}");
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.len() > suffix.len() && name.ends_with(&suffix))
}
