//! URL-keyed blob cache on the local filesystem.
//!
//! This crate provides:
//! - A content-addressable store for raw downloaded bytes
//! - SHA-256 cache keys derived from the URL string
//! - A constructor-injected handle so tests can substitute a temp directory
//!
//! Keys derive from the URL, not from the fetched bytes: identical content
//! at two URLs is cached twice, and a URL whose remote content changes
//! keeps serving the stale cached bytes. There is no eviction; the
//! directory grows unboundedly and is managed externally.

pub mod blob;
pub mod error;

pub use blob::{cache_key, BlobCache};
pub use error::{CacheError, CacheResult};
