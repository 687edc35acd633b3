use std::rc::Rc;

use log::{info, warn};

use super::dictionary::Dictionary;
use super::locale::{Locale, LocaleError};

/// Shown in place of text when a lookup is made with an empty key.
pub const EMPTY_KEY_PLACEHOLDER: &str = "[missing translation]";

/// Handle for localized text lookups.
///
/// Cloning is cheap: the dictionary is shared, only the active locale is
/// per-handle. The UI keeps one of these in a context and replaces it
/// wholesale when the locale changes, so every consumer sees either the old
/// locale or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct TranslationService {
    dictionary: Rc<Dictionary>,
    locale: Locale,
}

impl TranslationService {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Rc::new(dictionary),
            locale: Locale::default(),
        }
    }

    pub fn bundled() -> Self {
        Self::new(Dictionary::bundled())
    }

    /// Text for `key` in the active locale, falling back to English and
    /// finally to the key itself so a gap shows up on the page. Never
    /// returns an empty string.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if key.is_empty() {
            warn!("Translation requested with an empty key");
            return EMPTY_KEY_PLACEHOLDER;
        }
        if let Some(text) = self.dictionary.get(self.locale, key) {
            return text;
        }
        if self.locale != Locale::En {
            if let Some(text) = self.dictionary.get(Locale::En, key) {
                warn!("Missing '{}' translation for '{}', using English", self.locale, key);
                return text;
            }
        }
        warn!("No translation for '{}' in any locale", key);
        key
    }

    pub fn get_locale(&self) -> Locale {
        self.locale
    }

    /// Accepts "en" or "es". Anything else leaves the locale untouched.
    pub fn set_locale(&mut self, code: &str) -> Result<Locale, LocaleError> {
        match code.parse::<Locale>() {
            Ok(locale) => {
                self.switch_to(locale);
                Ok(locale)
            }
            Err(e) => {
                warn!("Rejected locale change: {}", e);
                Err(e)
            }
        }
    }

    pub fn switch_to(&mut self, locale: Locale) {
        if self.locale != locale {
            info!("Locale changed {} -> {}", self.locale, locale);
            self.locale = locale;
        }
    }

    pub fn toggle(&mut self) -> Locale {
        self.switch_to(self.locale.toggled());
        self.locale
    }

    /// Copy of this handle reading a different locale.
    pub fn with_locale(&self, locale: Locale) -> Self {
        let mut next = self.clone();
        next.switch_to(locale);
        next
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::bundled()
    }
}

// Two handles are equal when they read the same dictionary in the same
// locale; this is what lets a context provider notice a locale swap.
impl PartialEq for TranslationService {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale && Rc::ptr_eq(&self.dictionary, &other.dictionary)
    }
}
