use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents the top-level configuration file.
///
/// Both blocks are optional; a missing block (or a missing file) yields the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LoglensConfig {
    #[serde(default)]
    pub access_log: AccessLogConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessLogConfig {
    /// Access log to analyze.
    pub input: PathBuf,

    /// Directory receiving `<input file name>.json`.
    pub output_dir: PathBuf,

    /// Length of the ranked address and slow-request lists.
    pub top_n: usize,
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("access.log"),
            output_dir: PathBuf::from("results"),
            top_n: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Process listing command; its output must be `ps aux` shaped.
    pub command: String,
    pub args: Vec<String>,

    /// Directory receiving the timestamped text report.
    pub report_dir: PathBuf,

    /// Number of characters of the command line shown for peak consumers.
    pub command_width: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            command: "ps".to_string(),
            args: vec!["aux".to_string()],
            report_dir: PathBuf::from("."),
            command_width: 20,
        }
    }
}
