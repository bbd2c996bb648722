//! Engine error types.

use cropcolor_models::FailureReason;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while extracting a color from one URL.
///
/// All variants are per-URL failures: the batch runner converts them into
/// a `Failed` outcome instead of aborting the run. Only `ClientBuild`
/// happens outside per-URL work (once, at startup).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("fetch failed for {url}: {message}")]
    Network { url: String, message: String },

    #[error("image decode failed: {0}")]
    Decode(String),

    #[error("no cluster could be formed from the pixel sample")]
    Degenerate,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl EngineError {
    /// Create a network failure for a URL.
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<&EngineError> for FailureReason {
    fn from(error: &EngineError) -> Self {
        match error {
            EngineError::Network { message, .. } => FailureReason::Network(message.clone()),
            EngineError::Decode(message) => FailureReason::Decode(message.clone()),
            EngineError::Degenerate => {
                FailureReason::Degenerate("empty cluster set after all fallbacks".to_string())
            }
            EngineError::ClientBuild(message) => FailureReason::Network(message.clone()),
        }
    }
}
