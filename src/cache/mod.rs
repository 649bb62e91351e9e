// Cache module for local filesystem caching.
// Stores KEGG API responses for reuse across calls and sessions.

pub mod paths;
pub mod store;

pub use paths::*;
pub use store::CacheStore;
