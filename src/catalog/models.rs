//! Catalog data models
//!
//! This module defines the showcased entries and the built-in default catalog.

use serde::{Deserialize, Deserializer, Serialize};

/// One showcased entry
///
/// Every field is a plain string; fields missing from persisted data, or
/// stored as `null`, read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogItem {
    /// Display title, required when adding
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    /// Short description, may be empty
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    /// Primary action link, required when adding
    #[serde(deserialize_with = "null_as_empty")]
    pub play_url: String,
    /// Secondary action link; an empty value hides the action
    #[serde(deserialize_with = "null_as_empty")]
    pub source_url: String,
    /// Thumbnail path; an empty value yields a generated placeholder
    #[serde(deserialize_with = "null_as_empty")]
    pub thumbnail: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogItem {
    /// Create an item with every field set
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        play_url: impl Into<String>,
        source_url: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            play_url: play_url.into(),
            source_url: source_url.into(),
            thumbnail: thumbnail.into(),
        }
    }

    /// Build an item from raw form input, trimming every field
    pub fn from_form(form: &NewItem) -> Self {
        Self {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            play_url: form.play_url.trim().to_string(),
            source_url: form.source_url.trim().to_string(),
            thumbnail: form.thumbnail.trim().to_string(),
        }
    }
}

/// Raw add-form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    /// Title field
    pub title: String,
    /// Play URL field
    pub play_url: String,
    /// Source URL field
    pub source_url: String,
    /// Thumbnail field
    pub thumbnail: String,
    /// Description field
    pub description: String,
}

/// The built-in catalog used whenever storage holds nothing usable
///
/// Returns a fresh vector on every call so callers can never alter the defaults.
pub fn default_games() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "Orbit Breaker",
            "A tiny arcade-style space shooter. Use arrow keys and space to fire.",
            "https://orbit-breaker.vercel.app/",
            "https://github.com/yourname/space-blaster",
            "ob.png",
        ),
        CatalogItem::new(
            "Hello, There.",
            "A short puzzle game.",
            "https://hello-there-pearl.vercel.app",
            "",
            "ht.png",
        ),
        CatalogItem::new(
            "Tower Defense Extreme",
            "Tower defense game with extreme difficulty.",
            "https://defenseio.vercel.app/",
            "",
            "tv.png",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_games() {
        let games = default_games();
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].title, "Orbit Breaker");
        assert_eq!(games[2].thumbnail, "tv.png");
        assert!(games[1].source_url.is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(&default_games()[0]).unwrap();
        let object = json.as_object().unwrap();
        for key in ["title", "description", "playUrl", "sourceUrl", "thumbnail"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"title":"Solo","playUrl":"https://x","extra":1}"#).unwrap();
        assert_eq!(item.title, "Solo");
        assert_eq!(item.play_url, "https://x");
        assert_eq!(item.description, "");
        assert_eq!(item.source_url, "");
        assert_eq!(item.thumbnail, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{"title":"Mine","description":null,"playUrl":"u",
            "sourceUrl":null,"thumbnail":null}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, CatalogItem::new("Mine", "", "u", "", ""));
    }

    #[test]
    fn test_from_form_trims() {
        let form = NewItem {
            title: "  Space  ".to_string(),
            play_url: "\thttps://play\n".to_string(),
            source_url: " ".to_string(),
            thumbnail: String::new(),
            description: " fun ".to_string(),
        };
        let item = CatalogItem::from_form(&form);
        assert_eq!(item.title, "Space");
        assert_eq!(item.play_url, "https://play");
        assert_eq!(item.source_url, "");
        assert_eq!(item.description, "fun");
    }
}
