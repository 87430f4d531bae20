use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `contents` to a sibling `<name>.partial` file, then renames it over
/// `path`. On failure the partial file is removed, so `path` is either the
/// complete document or untouched.
pub(crate) fn write_whole(path: &Path, contents: &str) -> io::Result<()> {
    let partial = partial_path(path);

    let result = fs::write(&partial, contents).and_then(|()| fs::rename(&partial, path));
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }

    result
}

pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
