//! Benchmark orchestrator
//!
//! Runs one trial per schedule entry, in schedule order, and reports each
//! trial before the next one starts.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, info};

use super::trial::run_trial;
use crate::config::BenchmarkConfig;
use crate::metrics::TrialReporter;
use crate::utils::Result;
use crate::workload::{TrigWorkload, Workload};

/// Benchmark orchestrator
pub struct Orchestrator<W = TrigWorkload> {
    config: BenchmarkConfig,
    workload: Arc<W>,
}

impl Orchestrator<TrigWorkload> {
    /// Create new orchestrator running the trigonometric workload
    pub fn new(config: BenchmarkConfig) -> Self {
        let workload = TrigWorkload::new(config.iterations);
        Self::with_workload(config, workload)
    }
}

impl<W: Workload + 'static> Orchestrator<W> {
    /// Create orchestrator with a custom workload
    ///
    /// The single workload value is shared by every worker of every trial.
    pub fn with_workload(config: BenchmarkConfig, workload: W) -> Self {
        Self {
            config,
            workload: Arc::new(workload),
        }
    }

    /// Run the whole schedule
    ///
    /// No warm-up trials are discarded and there is no pause between trials.
    /// The first failing trial aborts the run; lines already written stay.
    pub fn run_all<O: Write>(&self, reporter: &mut TrialReporter<O>) -> Result<()> {
        if !self.config.quiet {
            reporter.report_banner()?;
        }

        info!(
            "Running {} trials ({} workers total), schedule {:?}, {} iterations per worker",
            self.config.schedule.len(),
            self.config.total_workers(),
            self.config.schedule,
            self.config.iterations
        );

        for (index, &threads) in self.config.schedule.iter().enumerate() {
            let trial = run_trial(threads, &self.workload)?;
            reporter.report_trial(&trial)?;
            debug!(
                "Trial {}: {} threads in {:.3}ms",
                index,
                trial.threads,
                trial.elapsed.as_secs_f64() * 1000.0
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::BenchmarkError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(schedule: &[usize], iterations: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            iterations,
            schedule: schedule.to_vec(),
            quiet: true,
            verbose: false,
        }
    }

    fn run_to_string<W: Workload + 'static>(
        orchestrator: &Orchestrator<W>,
    ) -> (Result<()>, String) {
        let mut reporter = TrialReporter::new(Vec::new());
        let result = orchestrator.run_all(&mut reporter);
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        (result, output)
    }

    /// Parse `nt=<N>.\tElapsed time <D> ns` into (N, D)
    fn parse_line(line: &str) -> (usize, u128) {
        let rest = line.strip_prefix("nt=").expect("missing nt= prefix");
        let (threads, rest) = rest.split_once(".\tElapsed time ").expect("bad separator");
        let elapsed = rest.strip_suffix(" ns").expect("missing ns suffix");
        (threads.parse().unwrap(), elapsed.parse().unwrap())
    }

    #[derive(Default)]
    struct CountingWorkload {
        executions: AtomicUsize,
    }

    impl Workload for CountingWorkload {
        fn execute(&self, _worker_id: usize) -> f64 {
            self.executions.fetch_add(1, Ordering::SeqCst);
            0.0
        }
    }

    #[test]
    fn test_single_entry_schedule() {
        let orchestrator = Orchestrator::new(config(&[2], 1000));
        let (result, output) = run_to_string(&orchestrator);

        result.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(parse_line(lines[0]).0, 2);
    }

    #[test]
    fn test_repeated_entries_each_reported() {
        let orchestrator = Orchestrator::new(config(&[1, 1], 1));
        let (result, output) = run_to_string(&orchestrator);

        result.unwrap();
        let threads: Vec<usize> = output.lines().map(|l| parse_line(l).0).collect();
        assert_eq!(threads, vec![1, 1]);
    }

    #[test]
    fn test_schedule_order_preserved() {
        let orchestrator = Orchestrator::new(config(&[3, 1, 2, 0], 10));
        let (result, output) = run_to_string(&orchestrator);

        result.unwrap();
        let threads: Vec<usize> = output.lines().map(|l| parse_line(l).0).collect();
        assert_eq!(threads, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_every_scheduled_worker_runs() {
        let orchestrator =
            Orchestrator::with_workload(config(&[2, 5, 0, 3], 1), CountingWorkload::default());
        let (result, _) = run_to_string(&orchestrator);

        result.unwrap();
        assert_eq!(orchestrator.workload.executions.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_banner_unless_quiet() {
        let mut cfg = config(&[1], 1);
        cfg.quiet = false;
        let (result, output) = run_to_string(&Orchestrator::new(cfg));

        result.unwrap();
        assert!(output.starts_with(crate::metrics::BANNER));
        assert_eq!(output.lines().filter(|l| l.starts_with("nt=")).count(), 1);
    }

    #[test]
    fn test_empty_schedule_reports_nothing() {
        let (result, output) = run_to_string(&Orchestrator::new(config(&[], 1)));

        result.unwrap();
        assert!(output.is_empty());
    }

    struct FailOnSecondTrial {
        executions: AtomicUsize,
    }

    impl Workload for FailOnSecondTrial {
        fn execute(&self, _worker_id: usize) -> f64 {
            // First trial has one worker, so execution index 1 belongs to trial two
            if self.executions.fetch_add(1, Ordering::SeqCst) >= 1 {
                panic!("workload failure");
            }
            0.0
        }
    }

    #[test]
    fn test_failure_aborts_run_keeping_prior_lines() {
        let orchestrator = Orchestrator::with_workload(
            config(&[1, 1, 1], 1),
            FailOnSecondTrial {
                executions: AtomicUsize::new(0),
            },
        );
        let (result, output) = run_to_string(&orchestrator);

        assert!(matches!(result, Err(BenchmarkError::WorkerPanicked { .. })));
        assert_eq!(output.lines().count(), 1);
        // The third trial never started
        assert_eq!(orchestrator.workload.executions.load(Ordering::SeqCst), 2);
    }
}
