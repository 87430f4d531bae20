use crate::cli::snapshot::types::{ProcessRecord, SystemReport};

/// Single pass over the process rows.
#[derive(Debug, Default)]
pub struct SystemAggregator {
    report: SystemReport,
}

impl SystemAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &ProcessRecord) {
        let report = &mut self.report;

        report.users.insert(record.user.clone());
        report.total_processes += 1;
        *report
            .user_process_counts
            .entry(record.user.clone())
            .or_insert(0) += 1;
        report.total_cpu += record.cpu;
        report.total_mem += record.mem;

        // strictly greater: the first row seen keeps a tie
        if report.peak_mem.as_ref().is_none_or(|p| record.mem > p.mem) {
            report.peak_mem = Some(record.clone());
        }
        if report.peak_cpu.as_ref().is_none_or(|p| record.cpu > p.cpu) {
            report.peak_cpu = Some(record.clone());
        }
    }

    pub fn skip(&mut self, rows: u64) {
        self.report.skipped_rows += rows;
    }

    pub fn finish(self) -> SystemReport {
        self.report
    }
}

pub fn aggregate(records: &[ProcessRecord]) -> SystemReport {
    let mut agg = SystemAggregator::new();
    for record in records {
        agg.push(record);
    }
    agg.finish()
}
