use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tome_core::{Result, TomeError};
use tracing::{debug, info};

/// Default directory for cached raw documents.
pub const DEFAULT_CACHE_DIR: &str = ".tome-cache";

/// Supplies the raw text of a document.
pub trait TextSource {
    /// Raw text for `locator`, using `cache_key` to find or store a local copy.
    fn raw_text(&self, locator: &str, cache_key: &str) -> Result<String>;
}

/// Fetches documents over HTTP, keeping a copy of each under a cache directory.
///
/// A cached copy is authoritative: once `<cache_dir>/<cache_key>` exists the
/// network is never consulted for that key again.
pub struct CachedHttpSource {
    cache_dir: PathBuf,
    timeout: Duration,
}

impl CachedHttpSource {
    pub fn new(cache_dir: &Path) -> Self {
        Self {
            cache_dir: cache_dir.to_path_buf(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Where `cache_key` is stored.
    pub fn cache_path(&self, cache_key: &str) -> PathBuf {
        self.cache_dir.join(cache_key)
    }

    fn fetch(&self, locator: &str) -> Result<String> {
        let unavailable = |e: reqwest::Error| TomeError::SourceUnavailable(format!("{locator}: {e}"));

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(unavailable)?;
        let response = client
            .get(locator)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(unavailable)?;
        response.text().map_err(unavailable)
    }

    /// Write `text` to a sibling `.part` file, then rename it onto `path`.
    fn store(&self, path: &Path, text: &str) -> Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        let mut partial = path.as_os_str().to_owned();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        fs::write(&partial, text.as_bytes())?;
        fs::rename(&partial, path)?;
        Ok(())
    }
}

/// Decode cached bytes, dropping invalid UTF-8 sequences.
fn decode(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(valid) => valid.to_string(),
        Cow::Owned(repaired) => repaired.replace(char::REPLACEMENT_CHARACTER, ""),
    }
}

impl TextSource for CachedHttpSource {
    fn raw_text(&self, locator: &str, cache_key: &str) -> Result<String> {
        let path = self.cache_path(cache_key);

        if path.exists() {
            debug!(path = %path.display(), "cache hit");
        } else {
            info!(locator, "fetching");
            let text = self.fetch(locator)?;
            self.store(&path, &text)?;
            debug!(path = %path.display(), bytes = text.len(), "cached");
        }

        Ok(decode(&fs::read(&path)?))
    }
}
