//! Showcase controller module
//!
//! This module wires the catalog store, the secret sequence detector and the
//! presentation layer together.
//!
//! # Overview
//!
//! The controller:
//! - **Renders the catalog** once at startup and after every successful change
//! - **Routes keyboard events**: Escape dismisses the panel, everything else goes
//!   to the `SequenceDetector`
//! - **Reveals the gated panel** when the detector recognizes the secret
//! - **Handles the add form and the remove-by-index field**, turning validation
//!   and index failures into blocking messages
//!
//! # Event Flow
//!
//! ```text
//! KeyEvent ──► ShowcaseController ──► SequenceDetector ──(match)──► Presenter::reveal_panel
//!                     │
//! NewItem / index ────┴──► CatalogStore ──► KeyValueStorage
//!                                 │
//!                                 └──► Presenter::render
//! ```
//!
//! # Ordering
//!
//! Everything runs on the caller's thread, one event at a time and to
//! completion. The sliding window depends on keys arriving in order, so hosts
//! must not feed events from more than one thread.

pub mod showcase_controller;

pub use showcase_controller::{KeyResponse, ShowcaseController};
