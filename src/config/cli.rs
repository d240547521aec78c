//! Command-line argument parsing
//!
//! Every argument is optional; running without arguments reproduces the
//! built-in schedule and iteration count.

use clap::Parser;

use crate::workload::DEFAULT_ITERATIONS;

/// Default thread-count schedule, alternating low and high concurrency
pub const DEFAULT_SCHEDULE: [usize; 6] = [2, 18, 2, 18, 2, 18];

/// Measure how a CPU-bound workload scales with the number of threads
#[derive(Parser, Debug, Clone)]
#[command(name = "thread-scaling-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Workload =====
    /// Iterations of the sin*cos loop per worker
    #[arg(short = 'n', long = "iterations", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    // ===== Schedule =====
    /// Comma-separated thread counts, one trial per entry (repeats allowed)
    #[arg(
        short = 's',
        long = "schedule",
        value_delimiter = ',',
        default_values_t = DEFAULT_SCHEDULE
    )]
    pub schedule: Vec<usize>,

    // ===== Output Options =====
    /// Quiet mode (omit the banner, log errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("--iterations must be at least 1".to_string());
        }

        if self.quiet && self.verbose {
            return Err("--quiet and --verbose are mutually exclusive".to_string());
        }

        Ok(())
    }
}
