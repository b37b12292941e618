//! Plain-text presenter used by the terminal host

use crate::catalog::CatalogItem;
use crate::presentation::card::{CardModel, removal_listing};
use crate::presentation::{PanelState, Presenter};
use std::io::Write;
use tracing::warn;

/// Writes cards, panel changes and messages as text lines
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    out: W,
    panel: PanelState,
}

impl<W: Write> TextPresenter<W> {
    /// Create a presenter writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            panel: PanelState::Hidden,
        }
    }

    /// Current panel visibility
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// Hand back the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, index: usize, card: &CardModel) -> std::io::Result<()> {
        writeln!(self.out, "[{index}] {}", card.title)?;
        if !card.description.is_empty() {
            writeln!(self.out, "    {}", card.description)?;
        }
        writeln!(self.out, "    play:   {}", card.play_href)?;
        if card.show_source {
            writeln!(self.out, "    source: {}", card.source_href)?;
        }
        Ok(())
    }

    fn emit(&mut self, f: impl FnOnce(&mut Self) -> std::io::Result<()>) {
        // Output is best effort, same as the storage layer.
        if let Err(e) = f(self).and_then(|()| self.out.flush()) {
            warn!("Failed to write to presenter output: {}", e);
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render(&mut self, items: &[CatalogItem]) {
        self.emit(|this| {
            writeln!(this.out, "=== Games ===")?;
            for (index, item) in items.iter().enumerate() {
                this.write_card(index, &CardModel::from_item(item))?;
            }
            if this.panel == PanelState::Visible {
                writeln!(this.out, "{}", removal_listing(items))?;
            }
            Ok(())
        });
    }

    fn reveal_panel(&mut self) {
        self.panel = PanelState::Visible;
        self.emit(|this| {
            writeln!(
                this.out,
                "--- Add a game: add <title> | <play url> [| source | thumbnail | description]"
            )?;
            writeln!(this.out, "--- Remove a game: remove <index>   (Escape or 'close' hides)")
        });
    }

    fn hide_panel(&mut self) {
        self.panel = PanelState::Hidden;
        self.emit(|this| writeln!(this.out, "--- panel hidden"));
    }

    fn notify(&mut self, message: &str) {
        self.emit(|this| writeln!(this.out, "! {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(presenter: TextPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_hides_missing_source() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.render(&[
            CatalogItem::new("Orbit", "Shoot", "https://play", "https://src", "ob.png"),
            CatalogItem::new("", "", "", "", ""),
        ]);
        let text = output(presenter);
        assert!(text.contains("[0] Orbit"));
        assert!(text.contains("source: https://src"));
        assert!(text.contains("[1] Untitled"));
        assert_eq!(text.matches("source:").count(), 1);
        assert!(!text.contains("Current games:"));
    }

    #[test]
    fn test_listing_shown_only_with_panel() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.reveal_panel();
        assert_eq!(presenter.panel(), PanelState::Visible);
        presenter.render(&[CatalogItem::new("A", "", "u", "", "")]);
        let text = output(presenter);
        assert!(text.contains("Current games:\n0: A"));
    }

    #[test]
    fn test_notify_and_hide() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.reveal_panel();
        presenter.hide_panel();
        presenter.notify("Removed: \"A\"");
        assert_eq!(presenter.panel(), PanelState::Hidden);
        assert!(output(presenter).contains("! Removed: \"A\""));
    }
}
