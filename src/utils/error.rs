//! Error types for thread-scaling-bench

use std::io;
use thiserror::Error;

/// Top-level benchmark error
///
/// Any of these aborts the whole run. Trial lines already written stay valid.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to spawn worker {worker}: {source}")]
    Spawn {
        worker: String,
        #[source]
        source: io::Error,
    },

    #[error("Worker {worker} panicked: {message}")]
    WorkerPanicked { worker: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
