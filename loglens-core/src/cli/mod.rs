pub mod logs;
pub mod snapshot;

use crate::conf::LoglensConfig;
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize the access log into <output>/<log file name>.json
    AccessLog {
        /// Directory for the JSON summary
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Report per-user and system-wide CPU/memory usage from a process snapshot
    Snapshot,
}

pub fn run(cmd: Command, cfg: LoglensConfig) -> Result<()> {
    match cmd {
        Command::AccessLog { output } => {
            let mut access_log = cfg.access_log;
            if let Some(output) = output {
                access_log.output_dir = output;
            }
            logs::run_access_log(&access_log)
        }
        Command::Snapshot => snapshot::run_snapshot(&cfg.snapshot),
    }
}
