use crate::cli::snapshot::aggregation::SystemAggregator;
use crate::cli::snapshot::error::SnapshotError;
use crate::cli::snapshot::parse::parse_process_table;
use crate::cli::snapshot::render::render_report;
use crate::cli::snapshot::source::{CommandSource, ProcessSource};
use crate::cli::snapshot::types::SystemReport;
use crate::conf::SnapshotConfig;
use crate::output::write_whole;
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
pub struct SnapshotOutcome {
    pub report: SystemReport,
    pub rendered: String,
    pub report_path: PathBuf,
}

pub fn run_snapshot(cfg: &SnapshotConfig) -> Result<()> {
    let source = CommandSource::from_config(cfg);
    let outcome = take_snapshot(&source, cfg, Local::now())?;

    println!("{}", outcome.rendered);
    println!("Report saved to: {}", outcome.report_path.display());

    Ok(())
}

/// `2024-03-01-14:05-scan.txt`, local time down to the minute.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d-%H:%M-scan.txt").to_string()
}

/// Reads one listing from `source`, renders the report and saves it.
///
/// The report file is only created once the listing was captured and parsed.
pub fn take_snapshot(
    source: &dyn ProcessSource,
    cfg: &SnapshotConfig,
    now: DateTime<Local>,
) -> Result<SnapshotOutcome, SnapshotError> {
    let output = source.snapshot()?;
    let table = parse_process_table(&output);

    let mut agg = SystemAggregator::new();
    for record in &table.records {
        agg.push(record);
    }
    agg.skip(table.skipped_rows);
    let report = agg.finish();

    let rendered = render_report(&report, cfg.command_width);

    let report_path = cfg.report_dir.join(report_file_name(&now));
    let write_err = |e| SnapshotError::WriteReport {
        path: report_path.clone(),
        source: e,
    };
    fs::create_dir_all(&cfg.report_dir).map_err(write_err)?;
    write_whole(&report_path, &rendered).map_err(write_err)?;

    tracing::info!(
        source = %source.describe(),
        processes = report.total_processes,
        skipped_rows = report.skipped_rows,
        report = %report_path.display(),
        "process snapshot saved"
    );

    Ok(SnapshotOutcome {
        report,
        rendered,
        report_path,
    })
}
