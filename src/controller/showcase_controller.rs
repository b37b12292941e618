//! Showcase controller implementation
//!
//! Owns the catalog store, the sequence detector and the presenter, and routes
//! keyboard input, form submissions and remove requests between them.

use crate::catalog::{CatalogItem, CatalogStore, KeyValueStorage, NewItem};
use crate::detector::{DetectorOutcome, KeyEvent, SequenceDetector};
use crate::error::{Result, ShowcaseError, get_user_friendly_error};
use crate::presentation::{PanelState, Presenter};
use tracing::{debug, info};

/// Effect of one keyboard event on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Escape hid the visible panel
    Dismissed,
    /// The secret was recognized and the panel revealed
    Revealed,
    /// Nothing visible changed
    Unchanged,
}

/// Coordinates the catalog, the detector and the presentation layer
#[derive(Debug)]
pub struct ShowcaseController<S: KeyValueStorage, P: Presenter> {
    store: CatalogStore<S>,
    detector: SequenceDetector,
    presenter: P,
    panel: PanelState,
}

impl<S: KeyValueStorage, P: Presenter> ShowcaseController<S, P> {
    /// Create a controller; nothing is drawn until [`start`](Self::start)
    pub fn new(store: CatalogStore<S>, detector: SequenceDetector, presenter: P) -> Self {
        Self {
            store,
            detector,
            presenter,
            panel: PanelState::Hidden,
        }
    }

    /// Draw the initial catalog with the panel hidden
    pub fn start(&mut self) {
        info!("Rendering {} games", self.store.len());
        self.panel = PanelState::Hidden;
        self.presenter.hide_panel();
        self.presenter.render(self.store.items());
    }

    /// Route one keyboard event
    ///
    /// Escape only ever dismisses the panel and never reaches the detector. A
    /// reveal redraws the catalog so the removal listing is current.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyResponse {
        if event.is_escape() {
            if self.panel == PanelState::Visible {
                self.close_panel();
                return KeyResponse::Dismissed;
            }
            return KeyResponse::Unchanged;
        }

        match self.detector.feed(event) {
            DetectorOutcome::Matched => {
                self.panel = PanelState::Visible;
                self.presenter.reveal_panel();
                self.presenter.render(self.store.items());
                KeyResponse::Revealed
            }
            outcome => {
                debug!("Key {:?} -> {:?}", event.key, outcome);
                KeyResponse::Unchanged
            }
        }
    }

    /// Hide the panel through its explicit close action
    pub fn close_panel(&mut self) {
        self.panel = PanelState::Hidden;
        self.presenter.hide_panel();
    }

    /// Add the submitted game to the front of the catalog
    ///
    /// Every field is trimmed first. A missing title or play URL is reported to
    /// the user and nothing changes.
    pub fn submit_form(&mut self, form: &NewItem) -> Result<()> {
        let item = CatalogItem::from_form(form);
        if let Err(e) = self.store.add(item) {
            return Err(self.report(e));
        }
        self.presenter.render(self.store.items());
        Ok(())
    }

    /// Remove the game whose index was typed into the remove field
    pub fn remove_by_input(&mut self, raw_index: &str) -> Result<CatalogItem> {
        let len = self.store.len();
        let index = match raw_index.trim().parse::<i64>() {
            Ok(index) => index,
            Err(_) => {
                return Err(self.report(ShowcaseError::InvalidIndexInput {
                    input: raw_index.to_string(),
                    len,
                }));
            }
        };

        match usize::try_from(index) {
            Ok(index) => self.remove_at(index),
            Err(_) => Err(self.report(ShowcaseError::Index { index, len })),
        }
    }

    /// Remove the game at `index` and report which one went
    pub fn remove_at(&mut self, index: usize) -> Result<CatalogItem> {
        match self.store.remove_at(index) {
            Ok(removed) => {
                self.presenter.render(self.store.items());
                self.presenter.notify(&format!("Removed: \"{}\"", removed.title));
                Ok(removed)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    fn report(&mut self, error: ShowcaseError) -> ShowcaseError {
        info!("Rejected catalog change: {}", error);
        if error.is_user_facing() {
            self.presenter.notify(&get_user_friendly_error(&error));
        }
        error
    }

    /// Current panel visibility
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// The catalog store
    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// The presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Tear down the controller, returning its parts
    pub fn into_parts(self) -> (CatalogStore<S>, SequenceDetector, P) {
        (self.store, self.detector, self.presenter)
    }
}
