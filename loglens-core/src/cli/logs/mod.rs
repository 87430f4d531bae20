//! Access Log Pipeline
//!
//! Reads a combined/extended format access log one line at a time and boils it
//! down to a small JSON summary: how many requests there were, which HTTP
//! methods were used, which clients sent the most requests and which requests
//! were the slowest.
//!
//! Lines that don't match the grammar are skipped, never fatal. The ranked
//! lists are kept in bounded heaps so memory does not grow with the number of
//! requests (only with the number of distinct client addresses).
//!
//! The overall data processing architecture is:
//!
//! access.log
//! parse_log_line
//! LogRecord
//! StatsAggregator
//! LogStats
//! render_stats
//! <output_dir>/<file>.json
//!

mod constants;
mod error;
mod parse;
mod render;
mod run;
mod stats_aggregation;
mod top_k;
mod types;

pub use error::AccessLogError;
pub use parse::parse_log_line;
pub use render::{output_path, render_stats, write_stats};
pub use run::{AccessLogOutcome, analyze_file, analyze_reader, analyze_to_dir, run_access_log};
pub use stats_aggregation::StatsAggregator;
pub use top_k::TopK;
pub use types::{LogRecord, LogStats, RequestDigest};
