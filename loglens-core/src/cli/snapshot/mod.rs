//! Process Snapshot Pipeline
//!
//! Takes one `ps aux` style listing, folds it into per-user and system-wide
//! CPU/memory totals, and renders a plain-text report that is echoed and
//! saved under a timestamped name.
//!
//! process source
//! parse_process_table
//! ProcessRecord
//! SystemAggregator
//! SystemReport
//! render_report
//! <report_dir>/<YYYY-MM-DD-HH:MM>-scan.txt
//!

mod aggregation;
mod error;
mod parse;
mod render;
mod run;
mod source;
mod types;

pub use aggregation::{SystemAggregator, aggregate};
pub use error::SnapshotError;
pub use parse::{ParsedTable, parse_process_table, split_fields};
pub use render::{render_report, truncate_command};
pub use run::{SnapshotOutcome, report_file_name, run_snapshot, take_snapshot};
pub use source::{CommandSource, ProcessSource, StaticSource};
pub use types::{ProcessRecord, SystemReport};
