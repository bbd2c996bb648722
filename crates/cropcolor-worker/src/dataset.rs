//! CSV dataset reading and writing.
//!
//! The input schema is `crop_name,image_url` with a required header row;
//! the output appends `dominant_color`. Every input row appears exactly
//! once in the output, in input order, whether or not a color could be
//! extracted for it.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use cropcolor_models::{AnnotatedRecord, CropRecord, ExtractionOutcome};

use crate::error::WorkerResult;

/// Read all input rows.
pub fn read_records(path: &Path) -> WorkerResult<Vec<CropRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Distinct non-blank URLs in first-seen order.
///
/// Rows without a URL are skipped before deduplication, and the dedup
/// guarantees each URL is fetched at most once per run.
pub fn distinct_urls(records: &[CropRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for record in records {
        if let Some(url) = &record.image_url {
            if seen.insert(url.clone()) {
                urls.push(url.clone());
            }
        }
    }
    urls
}

/// Join input rows with the outcome map, preserving input order.
pub fn annotate(
    records: Vec<CropRecord>,
    outcomes: &HashMap<String, ExtractionOutcome>,
) -> Vec<AnnotatedRecord> {
    records
        .into_iter()
        .map(|record| {
            let color = record
                .image_url
                .as_ref()
                .and_then(|url| outcomes.get(url))
                .and_then(ExtractionOutcome::hex_color);
            AnnotatedRecord::from_record(record, color)
        })
        .collect()
}

/// Write the annotated rows.
pub fn write_annotated(path: &Path, rows: &[AnnotatedRecord]) -> WorkerResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read annotated rows back (report generator input).
pub fn read_annotated(path: &Path) -> WorkerResult<Vec<AnnotatedRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}
