//! Remote catalog fetching.
//!
//! Catalogs published over HTTP are downloaded once and cached on disk,
//! keyed by the sha256 of their URL.

use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{PrereqError, Result};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Downloads catalog files with an on-disk cache.
///
/// # Example
///
/// ```no_run
/// use prereqs::catalog::CatalogFetcher;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let fetcher = CatalogFetcher::new(Duration::from_secs(30), PathBuf::from(".prereqs/cache")).unwrap();
/// let json = fetcher.fetch("https://example.edu/cs_courses.json").unwrap();
/// ```
pub struct CatalogFetcher {
    /// Request timeout.
    timeout: Duration,
    /// Cache directory for downloaded catalogs.
    cache_dir: PathBuf,
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl CatalogFetcher {
    /// Create a fetcher caching into `cache_dir`.
    pub fn new(timeout: Duration, cache_dir: PathBuf) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            timeout,
            cache_dir,
            client,
        })
    }

    /// Fetch a catalog, using the cached copy when present.
    pub fn fetch(&self, url: &str) -> Result<String> {
        if let Some(cached) = self.check_cache(url)? {
            debug!("Using cached catalog for {}", url);
            return Ok(cached);
        }

        let content = self.fetch_fresh(url)?;
        self.save_cache(url, &content)?;
        Ok(content)
    }

    /// Fetch a catalog, bypassing and then refreshing the cache.
    pub fn refresh(&self, url: &str) -> Result<String> {
        let content = self.fetch_fresh(url)?;
        self.save_cache(url, &content)?;
        Ok(content)
    }

    /// Fetch a catalog without touching the cache.
    pub fn fetch_fresh(&self, url: &str) -> Result<String> {
        info!("Fetching course catalog from {}", url);
        self.fetch_remote(url)
            .map_err(|e| PrereqError::CatalogFetchError {
                url: url.to_string(),
                message: format!("{:#}", e),
            })
    }

    fn fetch_remote(&self, url: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }

    fn check_cache(&self, url: &str) -> Result<Option<String>> {
        let cache_path = self.cache_path(url);
        if cache_path.exists() {
            let content = std::fs::read_to_string(&cache_path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }

    fn save_cache(&self, url: &str, content: &str) -> Result<()> {
        let cache_path = self.cache_path(url);
        if let Some(parent) = cache_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&cache_path, content)?;
        Ok(())
    }

    /// Where the cached copy of `url` lives.
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        let hash = hex::encode(hasher.finalize());
        self.cache_dir.join(format!("{}.json", hash))
    }

    /// Clear the cache for a specific URL.
    pub fn clear_cache(&self, url: &str) -> Result<()> {
        let cache_path = self.cache_path(url);
        if cache_path.exists() {
            std::fs::remove_file(&cache_path)?;
        }
        Ok(())
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
