//! English/Spanish string lookup.
//!
//! The dictionary is embedded at build time and never changes; the only
//! mutable piece is which locale a [`TranslationService`] currently reads.

mod dictionary;
mod locale;
mod service;

pub use dictionary::{Dictionary, DictionaryError};
pub use locale::{Locale, LocaleError};
pub use service::TranslationService;
