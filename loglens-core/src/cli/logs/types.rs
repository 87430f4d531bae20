use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::collections::BTreeMap;

/// One access-log line with every field present.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub ip: String,
    pub time: DateTime<FixedOffset>,
    pub method: String,
    pub url: String,
    pub protocol: String,
    pub status: u32,
    /// `-` in the log is stored as 0
    pub size: u64,
    pub referer: String,
    pub user_agent: String,
    /// unit is whatever the server logged; only used for ranking
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestDigest {
    pub method: String,
    pub url: String,
    pub ip: String,
    pub duration: u64,
    /// RFC 3339 with the offset from the log line
    pub time: String,
}

impl From<&LogRecord> for RequestDigest {
    fn from(record: &LogRecord) -> Self {
        Self {
            method: record.method.clone(),
            url: record.url.clone(),
            ip: record.ip.clone(),
            duration: record.duration,
            time: record.time.to_rfc3339(),
        }
    }
}

/// Finalized summary of one access log. Field names are the JSON keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogStats {
    pub total_requests: u64,
    pub http_methods: BTreeMap<String, u64>,
    /// (address, request count), most active first
    pub top_ips: Vec<(String, u64)>,
    /// slowest first
    pub slowest_requests: Vec<RequestDigest>,

    #[serde(skip)]
    pub skipped_lines: u64,
}
