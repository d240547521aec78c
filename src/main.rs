//! thread-scaling-bench - thread fan-out benchmark
//!
//! Runs a CPU-bound workload on a schedule of thread counts and prints the
//! elapsed time of each trial. On a free-threaded runtime the trials with
//! few and many threads should take about the same time.

use std::io;

use anyhow::{Context, Result};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use thread_scaling_bench::benchmark::Orchestrator;
use thread_scaling_bench::config::{BenchmarkConfig, CliArgs};
use thread_scaling_bench::metrics::TrialReporter;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // stdout carries only the banner and trial lines
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = BenchmarkConfig::from_cli(&args)?;

    let orchestrator = Orchestrator::new(config);
    let mut reporter = TrialReporter::new(io::stdout().lock());

    orchestrator
        .run_all(&mut reporter)
        .context("Benchmark aborted")?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
