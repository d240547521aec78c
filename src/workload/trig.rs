//! Trigonometric accumulator workload
//!
//! Pure CPU work: no allocation, no shared state, no I/O. Every call only
//! touches locals, so any number of threads can run it at once.

use std::hint::black_box;

use super::Workload;

/// Default per-worker iteration count
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Sum `sin(i) * cos(i)` for `i` in `1..iterations`
///
/// `iterations - 1` terms are accumulated, so `iterations <= 1` yields `0.0`.
#[inline(never)]
pub fn sin_cos_sum(iterations: u64) -> f64 {
    let mut val = 0.0f64;
    for i in 1..iterations {
        let x = black_box(i) as f64;
        val += x.sin() * x.cos();
    }
    val
}

/// The benchmark's fixed workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigWorkload {
    pub iterations: u64,
}

impl TrigWorkload {
    pub fn new(iterations: u64) -> Self {
        Self { iterations }
    }
}

impl Default for TrigWorkload {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Workload for TrigWorkload {
    // Every worker does the same work; the id is accepted but unused.
    fn execute(&self, _worker_id: usize) -> f64 {
        sin_cos_sum(self.iterations)
    }
}
