// Cache-aware response loading.
// Each content kind resolves from the local store when possible, otherwise
// fetches over HTTP and persists the body before returning it.

use tracing::{debug, info};

use crate::error::{KeggError, Result};

use super::client::KeggClient;
use super::request::Request;
use super::types::{Content, ContentKind};

/// Image formats accepted from the KEGG image endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Png,
}

impl ImageFormat {
    /// Identify the format from the leading bytes of a downloaded body.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    /// File extension for the format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Png => "png",
        }
    }
}

impl KeggClient {
    /// Resolve a request to its content, dispatching on the content kind.
    pub fn load(&self, request: &Request, force_refresh: bool) -> Result<Content> {
        match request.kind {
            ContentKind::Text => self
                .load_text(&request.url, &request.filename, force_refresh)
                .map(Content::Text),
            ContentKind::Json => self
                .load_json(&request.url, &request.filename, force_refresh)
                .map(Content::Json),
            ContentKind::Image => self
                .load_image(&request.url, &request.filename, force_refresh)
                .map(Content::Image),
        }
    }

    /// Load a text body, from cache when present unless forced.
    ///
    /// A body consisting of exactly one newline marks an unusable upstream
    /// response and fails with [`KeggError::InvalidContent`], whichever side
    /// of the cache it came from.
    pub fn load_text(&self, url: &str, filename: &str, force_refresh: bool) -> Result<String> {
        let text = if !force_refresh && self.store().exists(filename) {
            debug!(filename, "reading cached response");
            self.store().read_text(filename)?
        } else {
            info!(filename, url, "downloading from KEGG");
            let response = self.http_get(url)?;
            let text = response.text()?;
            self.store().write_text(filename, &text)?;
            info!(filename, "download complete");
            text
        };

        if text == "\n" {
            return Err(KeggError::InvalidContent {
                filename: filename.to_string(),
            });
        }
        Ok(text)
    }

    /// Load a JSON body, from cache when present unless forced.
    pub fn load_json(
        &self,
        url: &str,
        filename: &str,
        force_refresh: bool,
    ) -> Result<serde_json::Value> {
        if !force_refresh && self.store().exists(filename) {
            debug!(filename, "reading cached response");
            return self.store().read_json(filename);
        }

        info!(filename, url, "downloading from KEGG");
        let response = self.http_get(url)?;
        let json: serde_json::Value = response.json()?;
        self.store().write_json(filename, &json)?;
        info!(filename, "download complete");
        Ok(json)
    }

    /// Load an image body, from cache when present unless forced.
    ///
    /// Cached entries carry the extension sniffed at download time, so both
    /// suffix variants are probed. Fresh downloads must sniff as GIF or PNG
    /// or the call fails with [`KeggError::ImageFormat`].
    pub fn load_image(&self, url: &str, filename: &str, force_refresh: bool) -> Result<Vec<u8>> {
        if !force_refresh {
            for extension in ["gif", "png"] {
                let candidate = format!("{filename}.{extension}");
                if self.store().exists(&candidate) {
                    debug!(filename = %candidate, "reading cached image");
                    return self.store().read_bytes(&candidate);
                }
            }
        }

        info!(filename, url, "downloading image from KEGG");
        let response = self.http_get(url)?;
        let bytes = response.bytes()?.to_vec();
        let stored = self.persist_image(filename, &bytes)?;
        info!(filename = %stored, "download complete");
        Ok(bytes)
    }

    /// Sniff the image format and store the bytes under the extended name.
    fn persist_image(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let format = ImageFormat::sniff(bytes).ok_or_else(|| KeggError::ImageFormat {
            filename: filename.to_string(),
        })?;
        let stored = format!("{filename}.{}", format.extension());
        self.store().write_bytes(&stored, bytes)?;
        Ok(stored)
    }
}
