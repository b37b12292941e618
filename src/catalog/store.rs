//! Catalog store: the authoritative, persisted list of showcased items
//!
//! The store is loaded once from storage (or the built-in defaults), mutated
//! only through `add` and `remove_at`, and flushes the full list to storage
//! after every successful mutation. Storage failures never reach the caller:
//! a bad read degrades to the defaults and a failed write leaves the in-memory
//! list authoritative for the session.

use crate::catalog::models::{CatalogItem, default_games};
use crate::catalog::storage::KeyValueStorage;
use crate::error::{RequiredField, Result, ShowcaseError, StringError};
use tracing::{info, warn};

/// Storage key the catalog is persisted under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "games.portfolio.v1";

/// Owned catalog with its backing storage
#[derive(Debug)]
pub struct CatalogStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    items: Vec<CatalogItem>,
}

impl<S: KeyValueStorage> CatalogStore<S> {
    /// Open the catalog stored under `key`, falling back to the defaults
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            items: Vec::new(),
        };
        store.items = store.load();
        info!(
            "Catalog opened under key {:?} with {} items",
            store.key,
            store.items.len()
        );
        store
    }

    /// Read the persisted catalog, or a fresh copy of the defaults
    ///
    /// Never fails: an empty, missing, unreadable or malformed value is logged
    /// and replaced by the built-in catalog.
    pub fn load(&self) -> Vec<CatalogItem> {
        match self.read_persisted() {
            Ok(Some(items)) => items,
            Ok(None) => {
                info!("No saved catalog found, using defaults");
                default_games()
            }
            Err(e) => {
                warn!("Failed to load games from storage, using defaults: {}", e);
                default_games()
            }
        }
    }

    /// Read and validate the persisted value
    ///
    /// `Ok(None)` means nothing is stored; anything stored that is not a
    /// non-empty array of items is a `StorageRead` error.
    fn read_persisted(&self) -> Result<Option<Vec<CatalogItem>>> {
        let raw = self
            .storage
            .get(&self.key)
            .map_err(|e| ShowcaseError::StorageRead(Box::new(e)))?;

        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };

        let items: Vec<CatalogItem> =
            serde_json::from_str(&raw).map_err(|e| ShowcaseError::StorageRead(Box::new(e)))?;

        if items.is_empty() {
            return Err(ShowcaseError::StorageRead(StringError::new(
                "saved catalog is an empty list",
            )));
        }

        Ok(Some(items))
    }

    /// Serialize `items` and overwrite the persisted value
    ///
    /// Failures are logged and swallowed.
    pub fn save(&self, items: &[CatalogItem]) {
        if let Err(e) = self.try_save(items) {
            warn!("Failed to save games: {}", e);
        }
    }

    /// Like [`save`](Self::save) but reports the `StorageWrite` failure
    pub fn try_save(&self, items: &[CatalogItem]) -> Result<()> {
        let json = serde_json::to_string(items)
            .map_err(|e| ShowcaseError::StorageWrite(Box::new(e)))?;
        self.storage
            .set(&self.key, &json)
            .map_err(|e| ShowcaseError::StorageWrite(Box::new(e)))
    }

    /// Insert `item` at the front and persist
    ///
    /// `title` and `play_url` must be non-empty after trimming; otherwise the
    /// catalog is left untouched.
    pub fn add(&mut self, item: CatalogItem) -> Result<()> {
        validate(&item)?;
        info!("Adding {:?} to catalog", item.title);
        self.items.insert(0, item);
        self.save(&self.items);
        Ok(())
    }

    /// Remove and return the item at `index`, then persist
    pub fn remove_at(&mut self, index: usize) -> Result<CatalogItem> {
        if index >= self.items.len() {
            return Err(ShowcaseError::Index {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        info!("Removed {:?} from catalog at index {}", removed.title, index);
        self.save(&self.items);
        Ok(removed)
    }

    /// Replace the in-memory list with a fresh [`load`](Self::load)
    pub fn reload(&mut self) {
        self.items = self.load();
    }

    /// Current items, newest first
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items
    ///
    /// Only reachable by removing every item; a load never yields an empty list.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the store, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn validate(item: &CatalogItem) -> Result<()> {
    if item.title.trim().is_empty() {
        return Err(ShowcaseError::Validation {
            field: RequiredField::Title,
        });
    }
    if item.play_url.trim().is_empty() {
        return Err(ShowcaseError::Validation {
            field: RequiredField::PlayUrl,
        });
    }
    Ok(())
}
