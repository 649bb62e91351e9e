// Error types for the keggrest library.
// Covers parameter validation, remote API failures, cache and content errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeggError {
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("KEGG request to {url} failed with status {status}")]
    Remote {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid content in {filename}: response is a lone newline")]
    InvalidContent { filename: String },

    #[error("downloaded image for {filename} is neither GIF nor PNG")]
    ImageFormat { filename: String },

    #[error("malformed response line: {line:?}")]
    MalformedResponse { line: String },

    #[error("cache entry not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeggError {
    /// Shorthand for a validation failure on `key`.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        KeggError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KeggError>;
