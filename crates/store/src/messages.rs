/// Message bundles for sentinel labels
use indexmap::IndexMap;
use navorder_core::config::constants::{DEFAULT_LOCALE, FIRST_ELEMENT_KEY, LAST_ELEMENT_KEY};
use navorder_core::context::Localizer;
use navorder_core::error::Result;
use std::path::Path;
use tracing::debug;

fn builtin(locale: &str) -> Option<[(&'static str, &'static str); 2]> {
    match locale {
        "en" => Some([
            (FIRST_ELEMENT_KEY, "(first element)"),
            (LAST_ELEMENT_KEY, "(last element)"),
        ]),
        "de" => Some([
            (FIRST_ELEMENT_KEY, "(erstes Element)"),
            (LAST_ELEMENT_KEY, "(letztes Element)"),
        ]),
        _ => None,
    }
}

/// Localizer backed by built-in bundles plus optional overrides.
///
/// Lookup order: overrides, the locale's bundle, the English bundle, then
/// the key itself.
#[derive(Debug, Clone)]
pub struct MessageBundle {
    locale: String,
    overrides: IndexMap<String, String>,
}

impl MessageBundle {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            overrides: IndexMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), text.into());
        self
    }

    /// Merge overrides from a flat JSON object of key to text
    pub fn load_overrides(mut self, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let messages: IndexMap<String, String> = serde_json::from_str(&text)?;
        debug!("Loaded {} messages from {}", messages.len(), path.display());
        self.overrides.extend(messages);
        Ok(self)
    }

    fn lookup(locale: &str, key: &str) -> Option<&'static str> {
        // "de-AT" falls back to "de"
        let language = locale.split(['-', '_']).next().unwrap_or(locale);
        builtin(language)?
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, text)| *text)
    }
}

impl Default for MessageBundle {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Localizer for MessageBundle {
    fn translate(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        Self::lookup(&self.locale, key)
            .or_else(|| Self::lookup(DEFAULT_LOCALE, key))
            .map_or_else(|| key.to_string(), str::to_string)
    }
}
