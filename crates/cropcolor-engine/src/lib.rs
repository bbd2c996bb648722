//! Dominant-color extraction engine.
//!
//! This crate provides:
//! - HTTP image fetching with a fixed timeout
//! - Decoding and normalization to a fixed-resolution RGB sample
//! - Near-black/near-white and low-saturation pixel filtering with a
//!   degenerate-sample fallback
//! - Hue-circular HSV feature encoding
//! - Seeded k-means clustering
//! - Per-strategy cluster scoring and winner selection
//!
//! The public entry points are [`Strategy`] (a fixed composition of the
//! stages above, built once per batch run) and [`extract`], which turns
//! encoded image bytes into one hex color.

pub mod colorspace;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod kmeans;
pub mod loader;
pub mod score;
pub mod strategy;

pub use error::{EngineError, EngineResult};
pub use fetch::{ImageFetcher, FETCH_TIMEOUT};
pub use strategy::{extract, ColorSpace, Strategy};
