// Cache store for reading and writing cached responses.
// Handles text, JSON and raw byte entries in a single flat directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{KeggError, Result};

/// Filesystem store mapping logical filenames to entries under one cache
/// root. Entries are created on first fetch and overwritten silently; nothing
/// is evicted except through [`CacheStore::purge`].
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    /// Create a store rooted at `root`. The directory is created lazily on
    /// the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for a logical filename.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Check whether an entry exists.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Read a text entry.
    pub fn read_text(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        if !path.is_file() {
            return Err(KeggError::NotFound(name.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Read and decode a JSON entry.
    pub fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let contents = self.read_text(name)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Read a raw byte entry.
    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.path(name);
        if !path.is_file() {
            return Err(KeggError::NotFound(name.to_string()));
        }
        Ok(fs::read(path)?)
    }

    /// Write a text entry, overwriting any previous content.
    pub fn write_text(&self, name: &str, text: &str) -> Result<()> {
        self.write_bytes(name, text.as_bytes())
    }

    /// Serialize and write a JSON entry.
    pub fn write_json<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let json = serde_json::to_string(data)?;
        self.write_bytes(name, json.as_bytes())
    }

    /// Write a raw byte entry, overwriting any previous content.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        // Write via temp file so a reader never sees a half-written entry.
        let temp_path = self.root.join(format!("{name}.tmp"));
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&temp_path, self.path(name))?;

        Ok(())
    }

    /// Remove every entry under the cache root.
    pub fn purge(&self) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(entry.path())?;
            } else {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn store() -> (TempDir, CacheStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_write_and_read_text() {
        let (_dir, store) = store();

        store.write_text("pathway__list", "path:map00010\tGlycolysis").unwrap();

        assert!(store.exists("pathway__list"));
        let text = store.read_text("pathway__list").unwrap();
        assert_eq!(text, "path:map00010\tGlycolysis");
    }

    #[test]
    fn test_write_and_read_json() {
        let (_dir, store) = store();

        let data = TestData {
            name: "br:br08301".to_string(),
            value: 42,
        };
        store.write_json("entry_json", &data).unwrap();

        let read: TestData = store.read_json("entry_json").unwrap();
        assert_eq!(read, data);
    }

    #[test]
    fn test_write_and_read_bytes() {
        let (_dir, store) = store();

        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF];
        store.write_bytes("img.png", &bytes).unwrap();

        assert_eq!(store.read_bytes("img.png").unwrap(), bytes);
    }

    #[test]
    fn test_read_nonexistent() {
        let (_dir, store) = store();

        let err = store.read_text("missing").unwrap_err();
        assert!(matches!(err, KeggError::NotFound(name) if name == "missing"));
        assert!(!store.exists("missing"));
    }

    #[test]
    fn test_overwrite_silently() {
        let (_dir, store) = store();

        store.write_text("entry", "old").unwrap();
        store.write_text("entry", "new").unwrap();

        assert_eq!(store.read_text("entry").unwrap(), "new");
    }

    #[test]
    fn test_purge_removes_all_entries() {
        let (_dir, store) = store();

        store.write_text("a", "1").unwrap();
        store.write_text("b", "2").unwrap();
        store.purge().unwrap();

        assert!(!store.exists("a"));
        assert!(!store.exists("b"));
        // Root survives so subsequent writes still work.
        store.write_text("c", "3").unwrap();
        assert!(store.exists("c"));
    }

    #[test]
    fn test_purge_missing_root_is_noop() {
        let store = CacheStore::new("/nonexistent/keggrest-test-cache");
        store.purge().unwrap();
    }
}
