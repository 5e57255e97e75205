//! imgprobe - report image formats and dimensions from file headers.

mod collect;
mod engine;
mod options;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use collect::collect_files;
use engine::run_probe;
use options::ProbeOptions;

#[derive(Parser, Debug)]
#[command(name = "imgprobe")]
#[command(author, version, about = "Report image formats and pixel dimensions", long_about = None)]
struct Args {
    /// Files or directories to probe
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Descend into directories
    #[arg(short, long, default_value_t = false)]
    recursive: bool,

    /// Print one JSON object per line
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Hide files whose format was not recognized
    #[arg(long, default_value_t = false)]
    known_only: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> ProbeOptions {
        ProbeOptions::new()
            .recursive(self.recursive)
            .json(self.json)
            .with_jobs(self.jobs)
            .known_only(self.known_only)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = args.options();
    let collected = collect_files(&args.paths, options.recursive);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary =
        run_probe(&collected.files, &options, &mut out).context("Failed to write results")?;

    info!(
        recognized = summary.recognized,
        unknown = summary.unknown,
        failed = summary.failed,
        "done"
    );

    let failed = summary.failed + collected.walk_errors;
    if failed > 0 {
        anyhow::bail!("{failed} path(s) could not be probed");
    }

    Ok(())
}
