use clap::Parser;
use loglens_core::cli::{self, Command};
use loglens_core::conf::load_config;
use loglens_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "loglens",
    version,
    about = "loglens: access log and process snapshot summaries"
)]
struct Cli {
    /// Path to an HCL config file (defaults to ./loglens.hcl when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Cli::parse();

    init_logging();

    let cfg = match load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(args.command, cfg) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
