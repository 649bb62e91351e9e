// KEGG REST HTTP client.
// Issues blocking GET requests and maps failing statuses to typed errors.

use reqwest::blocking::{Client, Response};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{KeggError, Result};

use super::vocab::Vocabulary;

/// Client for the KEGG REST API with a local response cache.
///
/// Requests are synchronous and attempted exactly once; the only timeout is
/// the one configured in [`Config`]. Responses are cached on disk and reused
/// until a caller forces a refresh.
pub struct KeggClient {
    http: Client,
    config: Config,
    vocab: Vocabulary,
    store: CacheStore,
}

impl KeggClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::new())
    }

    /// Create a client with the given configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent("keggrest")
            .build()?;
        let store = CacheStore::new(&config.cache_dir);

        Ok(Self {
            http,
            store,
            vocab: Vocabulary::kegg(),
            config,
        })
    }

    /// Replace the database vocabulary.
    pub fn with_vocabulary(mut self, vocab: Vocabulary) -> Self {
        self.vocab = vocab;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The cache store backing this client.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Issue a GET request, failing on any non-success status.
    pub(crate) fn http_get(&self, url: &str) -> Result<Response> {
        let response = self.http.get(url).send()?;
        check_response(response)
    }
}

/// Map a failing status to [`KeggError::Remote`]; pass successes through.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(KeggError::Remote {
            url: response.url().to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_client_creation() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_cache_dir(temp_dir.path());
        let client = KeggClient::with_config(config).unwrap();

        assert_eq!(client.config().base_url, "http://rest.kegg.jp");
        assert_eq!(client.store().root(), temp_dir.path());
    }

    #[test]
    fn test_custom_vocabulary() {
        let temp_dir = TempDir::new().unwrap();
        let client = KeggClient::with_config(Config::with_cache_dir(temp_dir.path()))
            .unwrap()
            .with_vocabulary(Vocabulary::new(["only-this"]));

        assert!(client.vocabulary().contains("only-this"));
        assert!(!client.vocabulary().contains("pathway"));
    }
}
