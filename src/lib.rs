//! `Showcase` - catalog manager for a small game showcase page
//!
//! Keeps the list of showcased games in local storage (falling back to a
//! built-in catalog), renders it through a pluggable presenter, and unlocks an
//! add/remove panel when a secret word is typed anywhere outside a text field.
//!
//! The two stateful pieces are `CatalogStore`, which loads, validates and
//! persists the catalog, and `SequenceDetector`, a sliding-window matcher over
//! typed characters. `ShowcaseController` wires both to a `Presenter`.

// Module declarations
pub mod catalog;
pub mod config;
pub mod controller;
pub mod detector;
pub mod error;
pub mod presentation;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use catalog::{CatalogItem, CatalogStore};
pub use controller::ShowcaseController;
pub use detector::SequenceDetector;
pub use error::{Result, ShowcaseError};
