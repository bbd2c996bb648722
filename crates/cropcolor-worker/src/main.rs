//! Batch dominant-color annotation binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cropcolor_models::StrategyKind;
use cropcolor_worker::{dataset, BatchRunner, RunnerConfig};

/// Annotate a CSV dataset with dominant image colors.
#[derive(Debug, Parser)]
#[command(name = "cropcolor", version, about)]
struct Cli {
    /// Input CSV with crop_name,image_url columns
    input: PathBuf,
    /// Output CSV with a dominant_color column appended
    output: PathBuf,
    /// Extraction strategy: plain, filtered, or hsv
    #[arg(long)]
    strategy: Option<StrategyKind>,
    /// Cache directory for downloaded images
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// Maximum URLs processed concurrently
    #[arg(long)]
    jobs: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    // CLI flags override environment, environment overrides defaults.
    let mut config = RunnerConfig::from_env();
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(cache_dir) = cli.cache_dir {
        config.cache_dir = cache_dir;
    }
    if let Some(jobs) = cli.jobs {
        config.max_parallel = jobs;
    }

    info!(
        strategy = %config.strategy,
        cache_dir = %config.cache_dir.display(),
        jobs = config.max_parallel,
        "starting annotation run"
    );

    let records = dataset::read_records(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let urls = dataset::distinct_urls(&records);
    info!(rows = records.len(), distinct_urls = urls.len(), "dataset loaded");

    let runner = BatchRunner::new(&config)?;
    let outcomes = runner.run(&urls).await?;

    let resolved = outcomes.values().filter(|o| o.is_resolved()).count();
    let failed = outcomes.len() - resolved;

    let rows = dataset::annotate(records, &outcomes);
    dataset::write_annotated(&cli.output, &rows)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        resolved,
        failed,
        output = %cli.output.display(),
        "annotation run complete"
    );
    Ok(())
}

/// Initialize tracing with colored output for dev, JSON behind
/// `LOG_FORMAT=json`.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(true).with_target(false))
            .with(env_filter)
            .init();
    }
}
