//! Workload definitions
//!
//! A workload is the unit of work each worker thread runs exactly once per
//! trial. All workers of a trial share one immutable workload value.

pub mod trig;

pub use trig::{sin_cos_sum, TrigWorkload, DEFAULT_ITERATIONS};

/// Work executed by a single benchmark worker
///
/// Implementations must not mutate shared state: elapsed-time differences
/// between trials should come from the concurrency level only.
pub trait Workload: Send + Sync {
    /// Run the work once and return its accumulator
    ///
    /// The returned value is never inspected; workers feed it to
    /// `black_box` so the computation is not eliminated.
    fn execute(&self, worker_id: usize) -> f64;
}
