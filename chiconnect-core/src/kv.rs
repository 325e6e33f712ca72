//! Key-value storage port.
//!
//! The store accessor never talks to a storage medium directly. It is handed
//! something implementing [`KeyValueStore`], so the CLI can persist to a data
//! directory while tests run against [`MemoryStore`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// A flat string-to-string namespace.
pub trait KeyValueStore {
    /// Read the raw value at `key`, or `None` if nothing is stored there.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value at `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory backend, optionally limited to a byte quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that refuses writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        MemoryStore {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_bytes_excluding(key));
            let needed = key.len() + value.len();
            if needed > available {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory backend: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Open (and create if needed) a data directory.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            StoreError::Storage(format!(
                "Could not create data directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(DirStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        let temp = path.with_extension("json.tmp");

        std::fs::write(&temp, value)?;
        if let Err(e) = std::fs::rename(&temp, &path) {
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn memory_store_quota_rejects_oversized_write() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap();

        let err = store.set("other", "123456").unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { .. }));
        // The failed write left nothing behind
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn memory_store_quota_counts_overwrite_once() {
        let mut store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap();
        // Replacing the same key frees its previous bytes
        store.set("k", "987654321").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn dir_store_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(tmp.path().join("data")).unwrap();

        assert_eq!(store.get("chiconnect-events").unwrap(), None);
        store.set("chiconnect-events", "[]").unwrap();
        assert_eq!(store.get("chiconnect-events").unwrap().as_deref(), Some("[]"));
        assert!(store.dir().join("chiconnect-events.json").exists());
        assert!(!store.dir().join("chiconnect-events.json.tmp").exists());

        store.remove("chiconnect-events").unwrap();
        store.remove("chiconnect-events").unwrap();
        assert_eq!(store.get("chiconnect-events").unwrap(), None);
    }

    #[test]
    fn dir_store_failed_rename_cleans_up_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(tmp.path()).unwrap();

        // A non-empty directory where the value file should go blocks the rename
        let blocker = store.dir().join("chiconnect-events.json");
        std::fs::create_dir_all(blocker.join("inner")).unwrap();

        assert!(matches!(
            store.set("chiconnect-events", "[]"),
            Err(StoreError::Io(_))
        ));
        assert!(!store.dir().join("chiconnect-events.json.tmp").exists());
    }

    #[test]
    fn dir_store_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(tmp.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
    }
}
