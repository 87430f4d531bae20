use std::collections::{BTreeMap, BTreeSet};

/// One row of the process table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub user: String,
    pub pid: String,
    pub cpu: f64,
    pub mem: f64,
    /// full command line, internal whitespace preserved
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemReport {
    pub users: BTreeSet<String>,
    pub total_processes: u64,
    pub user_process_counts: BTreeMap<String, u64>,
    pub total_cpu: f64,
    pub total_mem: f64,
    /// first row with the highest memory percentage
    pub peak_mem: Option<ProcessRecord>,
    /// first row with the highest CPU percentage
    pub peak_cpu: Option<ProcessRecord>,
    /// rows dropped for a non-numeric CPU or memory value
    pub skipped_rows: u64,
}
