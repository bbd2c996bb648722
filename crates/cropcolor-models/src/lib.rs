//! Shared data models for the cropcolor pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Dataset rows (input and annotated output)
//! - Extraction outcomes and the per-URL failure taxonomy
//! - Hex color formatting
//! - Strategy identifiers

pub mod color;
pub mod outcome;
pub mod record;
pub mod strategy_kind;

// Re-export common types
pub use color::HexColor;
pub use outcome::{ExtractionOutcome, FailureReason};
pub use record::{AnnotatedRecord, CropRecord};
pub use strategy_kind::{ParseStrategyError, StrategyKind};
