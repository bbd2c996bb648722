//! Batch extraction runner.
//!
//! Fans per-URL work out across workers bounded by a semaphore and
//! aggregates an order-independent URL → outcome map. URLs are
//! deduplicated before the fan-out, so a single URL is never in flight
//! twice. Per-URL failures become `Failed` outcomes with a warning; cache
//! faults propagate and fail the whole run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{info, warn};

use cropcolor_cache::BlobCache;
use cropcolor_engine::{extract, EngineError, ImageFetcher, Strategy};
use cropcolor_models::{ExtractionOutcome, FailureReason};

use crate::config::RunnerConfig;
use crate::error::{WorkerError, WorkerResult};

/// Processes one batch of distinct URLs with a fixed strategy.
pub struct BatchRunner {
    cache: BlobCache,
    fetcher: ImageFetcher,
    strategy: Strategy,
    max_parallel: usize,
}

impl BatchRunner {
    /// Build a runner from configuration.
    pub fn new(config: &RunnerConfig) -> WorkerResult<Self> {
        let fetcher = ImageFetcher::new(config.fetch_timeout)?;
        Ok(Self::with_parts(
            BlobCache::new(&config.cache_dir),
            fetcher,
            Strategy::for_kind(config.strategy),
            config.max_parallel,
        ))
    }

    /// Build a runner from parts; tests inject a temp-dir cache.
    pub fn with_parts(
        cache: BlobCache,
        fetcher: ImageFetcher,
        strategy: Strategy,
        max_parallel: usize,
    ) -> Self {
        Self {
            cache,
            fetcher,
            strategy,
            max_parallel: max_parallel.max(1),
        }
    }

    /// Process every URL once and collect outcomes keyed by URL.
    pub async fn run(&self, urls: &[String]) -> WorkerResult<HashMap<String, ExtractionOutcome>> {
        let total = urls.len();
        let semaphore = Arc::new(Semaphore::new(self.max_parallel));
        let completed = AtomicUsize::new(0);

        let tasks: Vec<_> = urls
            .iter()
            .map(|url| {
                let semaphore = Arc::clone(&semaphore);
                let completed = &completed;
                async move {
                    let _permit = semaphore
                        .acquire()
                        .await
                        .map_err(|_| WorkerError::task("worker semaphore closed"))?;

                    let outcome = self.process_url(url).await?;
                    let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    info!(processed = done, total = total, url = %url, "image processed");
                    Ok::<_, WorkerError>((url.clone(), outcome))
                }
            })
            .collect();

        let mut outcomes = HashMap::with_capacity(total);
        for result in join_all(tasks).await {
            let (url, outcome) = result?;
            outcomes.insert(url, outcome);
        }
        Ok(outcomes)
    }

    /// Cache lookup → fetch on miss → decode and cluster off the runtime.
    async fn process_url(&self, url: &str) -> WorkerResult<ExtractionOutcome> {
        let bytes = match self.cache.get(url).await? {
            Some(bytes) => bytes,
            None => match self.fetcher.fetch(url).await {
                Ok(bytes) => {
                    self.cache.put(url, &bytes).await?;
                    bytes
                }
                Err(error) => return Ok(fail(url, &error)),
            },
        };

        let strategy = self.strategy;
        let extracted = tokio::task::spawn_blocking(move || extract(&bytes, &strategy))
            .await
            .map_err(|e| WorkerError::task(format!("extraction task panicked: {}", e)))?;

        match extracted {
            Ok(hex) => Ok(ExtractionOutcome::Resolved(hex)),
            Err(error) => Ok(fail(url, &error)),
        }
    }
}

/// Record a per-URL failure: warn and convert, never abort.
fn fail(url: &str, error: &EngineError) -> ExtractionOutcome {
    let reason = FailureReason::from(error);
    warn!(url = %url, reason = %reason, "extraction failed");
    ExtractionOutcome::Failed(reason)
}
