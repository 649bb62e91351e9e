//! Client library for the KEGG REST API with local disk caching.
//!
//! The four KEGG operations (`list`, `find`, `get`, `link`) are exposed as
//! methods on [`KeggClient`]. Arguments are validated against the database
//! vocabulary before any request is made; responses are cached under a flat
//! directory and reused on subsequent calls unless the caller forces a
//! refresh.
//!
//! ```no_run
//! use keggrest::KeggClient;
//!
//! let client = KeggClient::new()?;
//! let listing = client.list("pathway", None, true, false)?;
//! for (entry, description) in listing
//!     .entries
//!     .iter()
//!     .zip(listing.descriptions.as_deref().unwrap_or_default())
//! {
//!     println!("{entry}\t{description}");
//! }
//! # Ok::<(), keggrest::KeggError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod kegg;

pub use config::Config;
pub use error::{KeggError, Result};
pub use kegg::{
    Content, ContentKind, FindOption, GetOption, ImageFormat, KeggClient, ListOption, Listing,
    Request, Vocabulary,
};
