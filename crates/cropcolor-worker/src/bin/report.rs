//! Static report generator binary.
//!
//! Consumes the annotated CSV verbatim and renders a standalone
//! searchable HTML color grid.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cropcolor_worker::{dataset, report};

/// Render an annotated dataset as a searchable HTML color grid.
#[derive(Debug, Parser)]
#[command(name = "cropcolor-report", version, about)]
struct Cli {
    /// Annotated CSV produced by the cropcolor binary
    input: PathBuf,
    /// Output HTML file
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let rows = dataset::read_annotated(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let html = report::render_report(&rows)?;
    std::fs::write(&cli.output, html)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(records = rows.len(), output = %cli.output.display(), "report generated");
    Ok(())
}
