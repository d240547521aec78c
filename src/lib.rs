//! thread-scaling-bench library
//!
//! Measures how the wall-clock time of a fixed CPU-bound workload scales
//! with the number of concurrently running threads.

pub mod benchmark;
pub mod config;
pub mod metrics;
pub mod utils;
pub mod workload;
