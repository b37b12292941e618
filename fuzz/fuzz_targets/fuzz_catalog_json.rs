#![no_main]

use libfuzzer_sys::fuzz_target;
use showcase::catalog::{
    CatalogItem, CatalogStore, DEFAULT_STORAGE_KEY, MemoryStorage, default_games,
};

fuzz_target!(|data: &[u8]| {
    // Whatever is in storage, opening the catalog must yield a non-empty list
    if let Ok(s) = std::str::from_utf8(data) {
        let storage = MemoryStorage::with_value(DEFAULT_STORAGE_KEY, s);
        let store = CatalogStore::open(storage, DEFAULT_STORAGE_KEY);
        assert!(!store.is_empty());

        // A readable non-empty list is kept as stored, anything else falls back
        match serde_json::from_str::<Vec<CatalogItem>>(s) {
            Ok(items) if !items.is_empty() => assert_eq!(store.items(), items.as_slice()),
            _ => assert_eq!(store.items(), default_games().as_slice()),
        }
    }
});
