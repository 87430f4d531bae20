use crate::cli::logs::constants::{LOG_LINE_PATTERN, TIMESTAMP_FORMAT};
use crate::cli::logs::types::LogRecord;
use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static LOG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOG_LINE_PATTERN).expect("access log pattern must compile"));

/// Parses one access-log line.
///
/// Returns `None` when the line doesn't match the grammar, when the timestamp
/// isn't `DD/Mon/YYYY:HH:MM:SS ±ZZZZ`, or when a numeric field overflows.
/// Anything after the duration is ignored.
pub fn parse_log_line(line: &str) -> Option<LogRecord> {
    let caps = LOG_LINE.captures(line)?;

    let time = DateTime::parse_from_str(&caps["time"], TIMESTAMP_FORMAT).ok()?;

    let size = match &caps["size"] {
        "-" => 0,
        s => s.parse().ok()?,
    };

    Some(LogRecord {
        ip: caps["ip"].to_string(),
        time,
        method: caps["method"].to_string(),
        url: caps["url"].to_string(),
        protocol: caps["protocol"].to_string(),
        status: caps["status"].parse().ok()?,
        size,
        referer: caps["referer"].to_string(),
        user_agent: caps["user_agent"].to_string(),
        duration: caps["duration"].parse().ok()?,
    })
}
