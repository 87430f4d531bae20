use crate::cli::logs::error::AccessLogError;
use crate::cli::logs::parse::parse_log_line;
use crate::cli::logs::render::{render_stats, write_stats};
use crate::cli::logs::stats_aggregation::StatsAggregator;
use crate::cli::logs::types::LogStats;
use crate::conf::AccessLogConfig;
use anyhow::Result;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AccessLogOutcome {
    pub input_name: String,
    pub stats: LogStats,
    pub rendered: String,
    pub output_path: PathBuf,
}

pub fn run_access_log(cfg: &AccessLogConfig) -> Result<()> {
    let outcome = analyze_to_dir(&cfg.input, &cfg.output_dir, cfg.top_n)?;

    println!("Analysis results for {}:", outcome.input_name);
    println!("{}", outcome.rendered);

    Ok(())
}

/// Analyzes `input` and writes the JSON summary into `output_dir`.
///
/// Nothing is written unless the whole file was read and rendered.
pub fn analyze_to_dir(
    input: &Path,
    output_dir: &Path,
    top_n: usize,
) -> Result<AccessLogOutcome, AccessLogError> {
    let stats = analyze_file(input, top_n)?;
    let rendered = render_stats(&stats)?;

    let input_name = input.file_name().unwrap_or(OsStr::new("access.log"));
    let output_path = write_stats(&rendered, output_dir, input_name)?;

    tracing::info!(
        input = %input.display(),
        output = %output_path.display(),
        total_requests = stats.total_requests,
        skipped_lines = stats.skipped_lines,
        "access log analyzed"
    );

    Ok(AccessLogOutcome {
        input_name: input_name.to_string_lossy().into_owned(),
        stats,
        rendered,
        output_path,
    })
}

pub fn analyze_file(path: &Path, top_n: usize) -> Result<LogStats, AccessLogError> {
    if !path.is_file() {
        return Err(AccessLogError::InputMissing {
            path: path.to_path_buf(),
        });
    }

    let read_err = |source| AccessLogError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    analyze_reader(BufReader::new(file), top_n).map_err(read_err)
}

/// Streams lines from `reader` through the parser and aggregator.
///
/// Bytes that aren't valid UTF-8 are replaced rather than aborting the run;
/// such lines usually fail the grammar and get skipped.
pub fn analyze_reader<R: BufRead>(mut reader: R, top_n: usize) -> io::Result<LogStats> {
    let mut agg = StatsAggregator::new(top_n);
    let mut buf = Vec::new();
    let mut line_no = 0u64;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        match parse_log_line(line) {
            Some(record) => agg.push(&record),
            None => {
                tracing::debug!(line_no, "skipping unparseable access log line");
                agg.skip();
            }
        }
    }

    Ok(agg.finish())
}
