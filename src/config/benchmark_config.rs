//! Benchmark configuration derived from CLI arguments

use super::cli::{CliArgs, DEFAULT_SCHEDULE};
use crate::utils::{BenchmarkError, Result};
use crate::workload::DEFAULT_ITERATIONS;

/// Complete benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    // Workload
    pub iterations: u64,

    // Schedule
    pub schedule: Vec<usize>,

    // Output
    pub quiet: bool,
    pub verbose: bool,
}

impl BenchmarkConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        args.validate().map_err(BenchmarkError::Config)?;

        Ok(Self {
            iterations: args.iterations,
            schedule: args.schedule.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Total number of worker threads the schedule launches
    pub fn total_workers(&self) -> usize {
        self.schedule.iter().sum()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            schedule: DEFAULT_SCHEDULE.to_vec(),
            quiet: false,
            verbose: false,
        }
    }
}
