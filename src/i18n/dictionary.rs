use std::collections::HashMap;

use thiserror::Error;

use super::locale::{Locale, LocaleError};

const BUNDLED: &str = include_str!("translations.json");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("translation document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Every localized string the site knows, keyed by locale and then by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: HashMap<Locale, HashMap<String, String>>,
}

impl Dictionary {
    /// Parses a `{ "<locale>": { "<key>": "<text>" } }` document.
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (code, strings) in raw {
            let locale: Locale = code.parse()?;
            entries.insert(locale, strings);
        }
        Ok(Self { entries })
    }

    /// The dictionary compiled into the binary.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                // Lookups still work; they just fall through to the raw key.
                log::error!("Bundled translations failed to load: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(test)]
    pub fn insert(&mut self, locale: Locale, key: impl Into<String>, text: impl Into<String>) {
        self.entries
            .entry(locale)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Empty strings count as missing so callers can fall back.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries
            .get(&locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    #[cfg(test)]
    pub fn len(&self, locale: Locale) -> usize {
        self.entries.get(&locale).map_or(0, HashMap::len)
    }

    /// Keys present under `from` that `to` has no entry for, sorted.
    pub fn missing_keys(&self, from: Locale, to: Locale) -> Vec<&str> {
        let Some(source) = self.entries.get(&from) else {
            return Vec::new();
        };
        let target = self.entries.get(&to);
        let mut missing: Vec<&str> = source
            .keys()
            .filter(|key| target.map_or(true, |t| !t.contains_key(key.as_str())))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }
}
