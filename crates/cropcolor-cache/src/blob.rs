//! Blob storage keyed by URL hash.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::debug;

use crate::error::{CacheError, CacheResult};

/// File suffix appended to every cached blob.
const BLOB_SUFFIX: &str = ".img";

/// Generate the cache key for a URL: the SHA-256 hex digest of the UTF-8
/// URL string.
pub fn cache_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    format!("{:x}", digest)
}

/// Handle to a directory of cached image blobs.
///
/// The directory is created lazily on the first `put`. `put` is a plain
/// full-file write; concurrent writers racing on one key are acceptable
/// because every writer for a key writes the same bytes.
#[derive(Debug, Clone)]
pub struct BlobCache {
    root: PathBuf,
}

impl BlobCache {
    /// Create a handle rooted at `root`. No filesystem access happens here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache directory this handle reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, url: &str) -> PathBuf {
        self.root.join(format!("{}{}", cache_key(url), BLOB_SUFFIX))
    }

    /// Read the cached bytes for `url`, or `None` on a miss.
    pub async fn get(&self, url: &str) -> CacheResult<Option<Vec<u8>>> {
        let path = self.blob_path(url);
        match fs::read(&path).await {
            Ok(bytes) => {
                debug!(url = %url, path = %path.display(), "cache hit");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(url = %url, "cache miss");
                Ok(None)
            }
            Err(e) => Err(CacheError::io(path, e)),
        }
    }

    /// Store the bytes for `url`, creating the cache directory if needed.
    pub async fn put(&self, url: &str, bytes: &[u8]) -> CacheResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CacheError::io(&self.root, e))?;

        let path = self.blob_path(url);
        fs::write(&path, bytes)
            .await
            .map_err(|e| CacheError::io(path.clone(), e))?;

        debug!(url = %url, path = %path.display(), size = bytes.len(), "cached blob");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_sha256_hex() {
        let key = cache_key("https://example.com/a.png");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        // Stable across calls
        assert_eq!(key, cache_key("https://example.com/a.png"));
        assert_ne!(key, cache_key("https://example.com/b.png"));
    }

    #[tokio::test]
    async fn test_miss_on_empty_cache() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = BlobCache::new(dir.path().join("blobs"));

        // The directory does not even exist yet; a read is still a miss.
        let got = cache.get("https://example.com/x.png").await.expect("get");
        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = BlobCache::new(dir.path().join("blobs"));
        let url = "https://example.com/x.png";
        let bytes = vec![1u8, 2, 3, 4];

        cache.put(url, &bytes).await.expect("put");
        let got = cache.get(url).await.expect("get");
        assert_eq!(got, Some(bytes));
    }

    #[tokio::test]
    async fn test_rewrite_with_same_bytes_is_harmless() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = BlobCache::new(dir.path());
        let url = "https://example.com/x.png";

        cache.put(url, b"same").await.expect("first put");
        cache.put(url, b"same").await.expect("second put");
        let got = cache.get(url).await.expect("get");
        assert_eq!(got.as_deref(), Some(b"same".as_slice()));
    }

    #[tokio::test]
    async fn test_blob_file_name_uses_key_and_suffix() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = BlobCache::new(dir.path());
        let url = "https://example.com/x.png";

        cache.put(url, b"bytes").await.expect("put");
        let expected = dir.path().join(format!("{}.img", cache_key(url)));
        assert!(expected.exists());
    }
}
