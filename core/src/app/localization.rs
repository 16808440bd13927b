//! Localized text tables
//!
//! Text is grouped into named tables of `key = "text"` pairs. Lookups for a
//! missing table or key echo the key back, so an incomplete translation still
//! renders something readable.

use hashbrown::HashMap;
use serde::Deserialize;

/// Table holding every string used by the advanced settings window.
pub const GAME_SETTINGS_TABLE: &str = "GameSettings";

/// Built-in English strings.
const DEFAULT_TEXT: &str = include_str!("../../assets/text/en.toml");

/// A set of named text tables.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TextManager {
    tables: HashMap<String, HashMap<String, String>>,
}

impl TextManager {
    /// Create an empty text manager (every lookup echoes its key).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tables from TOML, one `[Table]` section per table.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// The built-in English strings.
    pub fn english() -> Self {
        match Self::from_toml(DEFAULT_TEXT) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Built-in text tables are invalid: {}", e);
                Self::default()
            }
        }
    }

    /// Add or replace a single entry.
    pub fn insert(&mut self, table: &str, key: &str, text: impl Into<String>) {
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(key.to_string(), text.into());
    }

    pub fn has_text(&self, table: &str, key: &str) -> bool {
        self.tables
            .get(table)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Text for `key`, or the key itself when there is no entry.
    pub fn get_text(&self, table: &str, key: &str) -> String {
        self.tables
            .get(table)
            .and_then(|entries| entries.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
