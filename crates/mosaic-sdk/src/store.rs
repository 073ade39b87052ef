//! Injected key-value storage for route auto-registration.
//!
//! The browser-facing original kept its registered-path set in
//! localStorage. Here the capability is a trait the host implements, so the
//! dedup logic works anywhere and tests need no real storage. Two
//! implementations ship: an in-memory store for tests and ephemeral hosts,
//! and a JSON-file store for long-lived native hosts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::MosaicError;

/// String key-value storage. `get` misses are `None`; `set` may fail (the
/// backing medium is the host's concern) and the caller decides whether
/// that failure matters.
pub trait PathStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), MosaicError>;
}

/// In-memory [`PathStore`]. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MosaicError> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// [`PathStore`] backed by a single JSON file holding a string map.
///
/// Reads tolerate a missing or corrupt file (treated as empty); writes
/// rewrite the whole map.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a `FileStore` reading and writing the file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl PathStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), MosaicError> {
        let mut map = self.read_map();
        map.insert(key.to_owned(), value.to_owned());
        let raw = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, raw)
            .map_err(|err| MosaicError::Store(format!("{}: {err}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("routes.json"));
        assert_eq!(store.get("k"), None);
        store.set("k", r#"["/blog"]"#).unwrap();
        assert_eq!(store.get("k").as_deref(), Some(r#"["/blog"]"#));

        // A second store over the same file sees the persisted entry.
        let reopened = FileStore::new(dir.path().join("routes.json"));
        assert_eq!(reopened.get("k").as_deref(), Some(r#"["/blog"]"#));
    }

    #[test]
    fn file_store_tolerates_corrupt_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
