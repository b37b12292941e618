//! Catalog persistence module
//!
//! Holds the list of showcased items, loads it from local storage (or the
//! built-in defaults) and persists it after every mutation.

pub mod models;
pub mod storage;
pub mod store;

pub use models::{CatalogItem, NewItem, default_games};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CatalogStore, DEFAULT_STORAGE_KEY};
