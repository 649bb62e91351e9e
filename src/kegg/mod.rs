// KEGG REST API module.
// Provides the client, request building, cache-aware loading, and parsing.

pub mod client;
pub mod download;
pub mod endpoints;
pub mod parse;
pub mod request;
pub mod types;
pub mod vocab;

pub use client::KeggClient;
pub use download::ImageFormat;
pub use request::Request;
pub use types::*;
pub use vocab::Vocabulary;
