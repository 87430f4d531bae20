use crate::cli::logs::constants::JSON_INDENT;
use crate::cli::logs::error::AccessLogError;
use crate::cli::logs::types::LogStats;
use crate::output::write_whole;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Pretty JSON with a four-space indent. Non-ASCII text is written as-is.
pub fn render_stats(stats: &LogStats) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    stats.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `<output_dir>/<input file name>.json`
pub fn output_path(output_dir: &Path, input_name: &OsStr) -> PathBuf {
    let mut file_name = input_name.to_os_string();
    file_name.push(".json");
    output_dir.join(file_name)
}

/// Writes an already rendered document, creating `output_dir` if needed.
pub fn write_stats(
    rendered: &str,
    output_dir: &Path,
    input_name: &OsStr,
) -> Result<PathBuf, AccessLogError> {
    fs::create_dir_all(output_dir).map_err(|source| AccessLogError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_path(output_dir, input_name);
    write_whole(&path, rendered).map_err(|source| AccessLogError::WriteOutput {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
