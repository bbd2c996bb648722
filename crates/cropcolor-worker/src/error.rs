//! Worker error types.

use thiserror::Error;

pub type WorkerResult<T> = Result<T, WorkerError>;

/// Run-level failures. Per-URL extraction failures are not errors; they
/// travel as `ExtractionOutcome::Failed` and never abort the batch.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("dataset error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cache error: {0}")]
    Cache(#[from] cropcolor_cache::CacheError),

    #[error("engine setup failed: {0}")]
    Engine(#[from] cropcolor_engine::EngineError),

    #[error("task failed: {0}")]
    Task(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkerError {
    pub fn task(msg: impl Into<String>) -> Self {
        Self::Task(msg.into())
    }
}
