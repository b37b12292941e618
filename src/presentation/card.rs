//! Card render model
//!
//! Pure mapping from a catalog item to what a card displays, including the
//! generated placeholder thumbnail for items without one.

use crate::catalog::CatalogItem;
use std::fmt::Write;

/// Title shown for an item whose title is empty
pub const UNTITLED: &str = "Untitled";

/// Link target for a missing URL
pub const EMPTY_HREF: &str = "#";

const PLACEHOLDER_PREFIX: &str = "data:image/svg+xml;utf8,";

/// Everything a card needs to display one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    /// Card heading
    pub title: String,
    /// Body text
    pub description: String,
    /// Primary "play" link
    pub play_href: String,
    /// Secondary "source" link
    pub source_href: String,
    /// Whether the secondary action is shown at all
    pub show_source: bool,
    /// Image source: the item's thumbnail or a generated placeholder
    pub thumbnail_src: String,
}

impl CardModel {
    /// Build the card for `item`
    pub fn from_item(item: &CatalogItem) -> Self {
        let title = if item.title.is_empty() {
            UNTITLED.to_string()
        } else {
            item.title.clone()
        };

        let thumbnail_src = if item.thumbnail.is_empty() {
            placeholder_thumbnail(&item.title)
        } else {
            item.thumbnail.clone()
        };

        Self {
            title,
            description: item.description.clone(),
            play_href: href_or_empty(&item.play_url),
            source_href: href_or_empty(&item.source_url),
            show_source: !item.source_url.is_empty(),
            thumbnail_src,
        }
    }
}

fn href_or_empty(url: &str) -> String {
    if url.is_empty() {
        EMPTY_HREF.to_string()
    } else {
        url.to_string()
    }
}

/// Uppercased first letter of the trimmed title, or `?` for a blank title
pub fn placeholder_letter(title: &str) -> String {
    match title.trim().chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

/// SVG placeholder showing the title's first letter, as a data URL
pub fn placeholder_thumbnail(title: &str) -> String {
    let letter = placeholder_letter(title);
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='400'>\
         <defs><linearGradient id='g' x1='0' x2='1'>\
         <stop offset='0' stop-color='#071b2b'/><stop offset='1' stop-color='#0b1220'/>\
         </linearGradient></defs>\
         <rect width='100%' height='100%' fill='url(#g)' />\
         <text x='50%' y='50%' font-family='Segoe UI, Roboto, Arial' font-size='120' \
         fill='rgba(255,255,255,0.08)' dominant-baseline='middle' text-anchor='middle'>{}</text>\
         </svg>",
        escape_xml(&letter)
    );
    format!("{PLACEHOLDER_PREFIX}{}", urlencoding::encode(&svg))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Text of the "current games" list shown in the remove section
pub fn removal_listing(items: &[CatalogItem]) -> String {
    let mut listing = String::from("Current games:");
    for (index, item) in items.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(listing, "\n{index}: {}", item.title);
    }
    listing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_with_all_fields() {
        let item = CatalogItem::new("Orbit", "Shoot", "https://play", "https://src", "ob.png");
        let card = CardModel::from_item(&item);
        assert_eq!(card.title, "Orbit");
        assert_eq!(card.play_href, "https://play");
        assert_eq!(card.source_href, "https://src");
        assert!(card.show_source);
        assert_eq!(card.thumbnail_src, "ob.png");
    }

    #[test]
    fn test_card_fallbacks() {
        let card = CardModel::from_item(&CatalogItem::default());
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.description, "");
        assert_eq!(card.play_href, EMPTY_HREF);
        assert_eq!(card.source_href, EMPTY_HREF);
        assert!(!card.show_source);
        assert!(card.thumbnail_src.starts_with(PLACEHOLDER_PREFIX));
    }

    #[test]
    fn test_placeholder_letter() {
        assert_eq!(placeholder_letter("  tower"), "T");
        assert_eq!(placeholder_letter("   "), "?");
        assert_eq!(placeholder_letter(""), "?");
        assert_eq!(placeholder_letter("ßeta"), "SS");
    }

    #[test]
    fn test_placeholder_is_component_encoded() {
        let src = placeholder_thumbnail("hello");
        let encoded = src.strip_prefix(PLACEHOLDER_PREFIX).unwrap();
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('#'));
        assert!(!encoded.contains(' '));

        let svg = urlencoding::decode(encoded).unwrap();
        assert!(svg.contains(">H</text>"));
    }

    #[test]
    fn test_placeholder_escapes_markup() {
        let svg_src = placeholder_thumbnail("<script>");
        let svg = urlencoding::decode(svg_src.strip_prefix(PLACEHOLDER_PREFIX).unwrap()).unwrap();
        assert!(svg.contains(">&lt;</text>"));
    }

    #[test]
    fn test_removal_listing() {
        let items = vec![
            CatalogItem::new("A", "", "u", "", ""),
            CatalogItem::new("B", "", "u", "", ""),
        ];
        assert_eq!(removal_listing(&items), "Current games:\n0: A\n1: B");
        assert_eq!(removal_listing(&[]), "Current games:");
    }
}
