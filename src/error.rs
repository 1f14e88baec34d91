//! Error types for the sorting front ends.
//!
//! The sorting algorithms themselves cannot fail. Errors come from the worker
//! pool and from the demonstration harness writing its output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Thread pool needs at least one worker, got {0}")]
    InvalidThreadCount(usize),

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("Worker pool disconnected before all merges completed")]
    WorkerDisconnected,

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
