//! A single benchmark trial
//!
//! One trial fans out `threads` workers, joins all of them and reports the
//! wall-clock time between the two timestamps. Thread creation sits inside
//! the timed window.

use std::any::Any;
use std::hint::black_box;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::utils::{BenchmarkError, Result};
use crate::workload::Workload;

/// Outcome of one trial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// Number of workers launched
    pub threads: usize,
    /// Time from before the first spawn until after the last join
    pub elapsed: Duration,
}

impl Trial {
    /// Elapsed wall-clock time in nanoseconds
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}

/// Thread name given to the worker with the given id
pub fn worker_name(worker_id: usize) -> String {
    format!("Thread{}", worker_id)
}

/// A worker that has been configured but not started
struct WorkerUnit<W> {
    id: usize,
    builder: thread::Builder,
    workload: Arc<W>,
}

impl<W: Workload + 'static> WorkerUnit<W> {
    fn new(id: usize, builder: thread::Builder, workload: &Arc<W>) -> Self {
        Self {
            id,
            builder,
            workload: Arc::clone(workload),
        }
    }

    fn spawn(self) -> io::Result<JoinHandle<()>> {
        let Self {
            id,
            builder,
            workload,
        } = self;
        builder.spawn(move || {
            black_box(workload.execute(id));
        })
    }
}

/// Run one trial with `threads` concurrent workers
///
/// Blocks until every spawned worker has finished. On a spawn failure or a
/// worker panic the remaining workers are still joined before the error is
/// returned, so no thread outlives its trial.
pub fn run_trial<W>(threads: usize, workload: &Arc<W>) -> Result<Trial>
where
    W: Workload + 'static,
{
    run_trial_with(threads, workload, |_, builder| builder)
}

/// Run one trial, letting `configure` adjust each worker's thread builder
///
/// `configure` receives the worker id and its already named builder.
pub(crate) fn run_trial_with<W, F>(
    threads: usize,
    workload: &Arc<W>,
    configure: F,
) -> Result<Trial>
where
    W: Workload + 'static,
    F: Fn(usize, thread::Builder) -> thread::Builder,
{
    // Setup: configure every worker before the clock starts
    let units: Vec<WorkerUnit<W>> = (0..threads)
        .map(|id| {
            let builder = configure(id, thread::Builder::new().name(worker_name(id)));
            WorkerUnit::new(id, builder, workload)
        })
        .collect();
    let mut handles: Vec<(usize, JoinHandle<()>)> = Vec::with_capacity(threads);
    let mut failure: Option<BenchmarkError> = None;

    let start = Instant::now();

    for unit in units {
        let id = unit.id;
        match unit.spawn() {
            Ok(handle) => handles.push((id, handle)),
            Err(source) => {
                failure = Some(BenchmarkError::Spawn {
                    worker: worker_name(id),
                    source,
                });
                break;
            }
        }
    }

    for (id, handle) in handles {
        if let Err(payload) = handle.join() {
            // First failure wins; keep joining the rest
            if failure.is_none() {
                failure = Some(BenchmarkError::WorkerPanicked {
                    worker: worker_name(id),
                    message: panic_message(&*payload),
                });
            }
        }
    }

    let stop = Instant::now();

    if let Some(err) = failure {
        return Err(err);
    }

    Ok(Trial {
        threads,
        elapsed: stop.duration_since(start),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
