//! Runner configuration.

use std::path::PathBuf;
use std::time::Duration;

use cropcolor_models::StrategyKind;

/// Batch runner configuration.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Extraction strategy applied to every URL in the run
    pub strategy: StrategyKind,
    /// Directory holding cached downloads
    pub cache_dir: PathBuf,
    /// Maximum URLs processed concurrently
    pub max_parallel: usize,
    /// Per-request download timeout
    pub fetch_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            cache_dir: PathBuf::from(".image_cache"),
            max_parallel: 4,
            fetch_timeout: cropcolor_engine::FETCH_TIMEOUT,
        }
    }
}

impl RunnerConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strategy: std::env::var("CROPCOLOR_STRATEGY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.strategy),
            cache_dir: std::env::var("CROPCOLOR_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            max_parallel: std::env::var("CROPCOLOR_MAX_PARALLEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_parallel),
            fetch_timeout: Duration::from_secs(
                std::env::var("CROPCOLOR_FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.fetch_timeout.as_secs()),
            ),
        }
    }
}
