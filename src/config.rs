// Library configuration.
// Replaces process-wide constants with values injected at construction time.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

/// Default KEGG REST endpoint.
pub const DEFAULT_BASE_URL: &str = "http://rest.kegg.jp";

/// Default request timeout. Requests are attempted exactly once; there is no
/// retry or backoff.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`crate::KeggClient`](crate::kegg::KeggClient).
///
/// Holds the REST base URL, the cache root directory, and the HTTP timeout.
/// Tests inject a temporary cache directory via [`Config::with_cache_dir`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the KEGG REST API, without a trailing slash.
    pub base_url: String,
    /// Directory where downloaded responses are cached.
    pub cache_dir: PathBuf,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Config {
    /// Configuration pointing at the public KEGG API with the platform cache
    /// directory (~/.cache/keggrest on Linux).
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir: default_cache_dir(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Same as [`Config::new`] but with a custom cache directory.
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::new()
        }
    }

    /// Override the base URL, without a trailing slash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform cache directory, falling back to a relative directory when no
/// home directory can be determined.
fn default_cache_dir() -> PathBuf {
    ProjectDirs::from("", "", "keggrest")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("kegg_downloads"))
}
