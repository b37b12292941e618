//! Local persistent key-value storage
//!
//! The catalog is persisted as a single serialized value under a namespaced key.
//! `FileStorage` keeps one JSON file per key in a data directory and writes
//! atomically; `MemoryStorage` keeps values in process and can simulate a full
//! or unavailable store.

use crate::error::{Result, ShowcaseError, StringError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::NamedTempFile;
use tracing::debug;

/// A string-keyed, string-valued persistent store
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any prior value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value under `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the stored values
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    ///
    /// Characters outside `[A-Za-z0-9._-]` are replaced so a key can never
    /// escape the storage directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file_stem}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);

        // Atomic write: temp file in the same directory, then rename over the target
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(value.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| ShowcaseError::Io(e.error))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage
///
/// Clones share the same underlying map, so a handle kept by the caller observes
/// writes made through a handle owned by a store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.values.lock().insert(key.into(), value.into());
        storage
    }

    /// Make every subsequent read and write fail, as a full or disabled store would
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Snapshot of the raw value under `key`, bypassing availability
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ShowcaseError::Io(std::io::Error::other(StringError(
                "storage unavailable".to_string(),
            ))));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_available()?;
        self.values.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;

    #[test]
    fn test_file_storage_missing_key() {
        let temp_dir = create_test_dir();
        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get("games.portfolio.v1").unwrap(), None);
    }

    #[test]
    fn test_file_storage_overwrites() {
        let temp_dir = create_test_dir();
        let storage = FileStorage::new(temp_dir.path().join("nested"));

        storage.set("games.portfolio.v1", "[1]").unwrap();
        storage.set("games.portfolio.v1", "[2]").unwrap();

        assert_eq!(
            storage.get("games.portfolio.v1").unwrap().as_deref(),
            Some("[2]")
        );
        assert!(storage.path_for("games.portfolio.v1").ends_with("games.portfolio.v1.json"));
    }

    #[test]
    fn test_file_storage_remove_is_idempotent() {
        let temp_dir = create_test_dir();
        let storage = FileStorage::new(temp_dir.path());
        storage.set("k", "v").unwrap();
        storage.remove("k").unwrap();
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_storage_key_cannot_escape_dir() {
        let storage = FileStorage::new("/data");
        let path = storage.path_for("../../etc/passwd");
        assert_eq!(path.parent(), Some(Path::new("/data")));
    }

    #[test]
    fn test_memory_storage_shares_between_clones() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(handle.raw("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_storage_unavailable() {
        let storage = MemoryStorage::with_value("k", "v");
        storage.set_unavailable(true);
        assert!(storage.get("k").is_err());
        assert!(storage.set("k", "w").is_err());
        assert_eq!(storage.raw("k").as_deref(), Some("v"));

        storage.set_unavailable(false);
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }
}
