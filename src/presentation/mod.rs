//! Presentation layer contract
//!
//! The catalog and the detector never draw anything themselves. A `Presenter`
//! receives the full item list whenever it changes, shows or hides the gated
//! add/remove panel, and displays the blocking messages produced by the form.
//!
//! # Panel lifecycle
//!
//! ```text
//! Hidden ──(secret typed)──► Visible ──(Escape / close)──► Hidden
//! ```

pub mod card;
pub mod text;

pub use card::{CardModel, placeholder_thumbnail, removal_listing};
pub use text::TextPresenter;

use crate::catalog::CatalogItem;

/// Visibility of the gated add/remove panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Panel is not shown (initial state)
    #[default]
    Hidden,
    /// Panel is shown and its first field has focus
    Visible,
}

/// Renders the catalog and toggles the gated panel
pub trait Presenter {
    /// Replace every displayed card with one card per item, in order
    fn render(&mut self, items: &[CatalogItem]);

    /// Show the gated panel
    fn reveal_panel(&mut self);

    /// Hide the gated panel
    fn hide_panel(&mut self);

    /// Show a blocking message to the user
    fn notify(&mut self, message: &str);
}
