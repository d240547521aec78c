//! Benchmark orchestration and trials
//!
//! - Trial: fan out N worker threads, join them, time the whole thing
//! - Orchestrator: walks the thread-count schedule and reports each trial

pub mod orchestrator;
pub mod trial;

pub use orchestrator::Orchestrator;
pub use trial::{run_trial, worker_name, Trial};
