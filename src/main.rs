//! `Showcase` - terminal host for the game catalog
//!
//! Renders the catalog as text and treats standard input as the keyboard:
//! every character of a line is a key press, and the line `esc` is the Escape
//! key. Once the secret has been typed the add/remove panel opens and the
//! `add`, `remove` and `close` commands become available.

use anyhow::{Context, Result};
use showcase::{
    catalog::{CatalogStore, FileStorage, NewItem},
    config::ConfigManager,
    controller::ShowcaseController,
    detector::{ESCAPE_KEY, KeyEvent, SequenceDetector},
    presentation::{PanelState, TextPresenter},
    utils,
};
use std::io::{BufRead, Stdout};
use tracing::info;

type Controller = ShowcaseController<FileStorage, TextPresenter<Stdout>>;

fn main() -> Result<()> {
    utils::init_logging(&ConfigManager::get_data_dir())
        .context("Failed to initialize logging system")?;

    info!("Showcase v{} starting...", env!("CARGO_PKG_VERSION"));

    let config =
        ConfigManager::load_or_create().context("Failed to load application configuration")?;
    let storage = FileStorage::new(ConfigManager::storage_dir(&config));
    let store = CatalogStore::open(storage, config.storage_key.as_str());
    let detector =
        SequenceDetector::new(&config.secret).context("Failed to create sequence detector")?;

    let presenter = TextPresenter::new(std::io::stdout());
    let mut controller = ShowcaseController::new(store, detector, presenter);
    controller.start();

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read from standard input")?;
        handle_line(&mut controller, &line);
    }

    info!("Showcase shutting down");
    Ok(())
}

fn handle_line(controller: &mut Controller, line: &str) {
    if line.trim() == "esc" {
        controller.handle_key(&KeyEvent::key(ESCAPE_KEY));
        return;
    }

    if controller.panel() == PanelState::Visible {
        if line.trim() == "close" {
            controller.close_panel();
            return;
        }
        if let Some(rest) = line.strip_prefix("add ") {
            // Rejections are already reported through the presenter
            let _ = controller.submit_form(&parse_form(rest));
            return;
        }
        if let Some(rest) = line.strip_prefix("remove ") {
            let _ = controller.remove_by_input(rest);
            return;
        }
    }

    for event in KeyEvent::typed(line) {
        controller.handle_key(&event);
    }
}

/// `title | play url | source url | thumbnail | description`
fn parse_form(input: &str) -> NewItem {
    let mut fields = input.splitn(5, '|').map(str::to_string);
    NewItem {
        title: fields.next().unwrap_or_default(),
        play_url: fields.next().unwrap_or_default(),
        source_url: fields.next().unwrap_or_default(),
        thumbnail: fields.next().unwrap_or_default(),
        description: fields.next().unwrap_or_default(),
    }
}
