use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unsupported locale '{0}', expected 'en' or 'es'")]
    Unsupported(String),
}

/// The two languages the site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Name of the language written in that language, for toggle labels.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// The other supported locale. There is no third state.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        crate::config::DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
    }

    #[test]
    fn rejects_everything_else() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(LocaleError::Unsupported("fr".to_string()))
        );
        assert!("".parse::<Locale>().is_err());
        assert!("en-US".parse::<Locale>().is_err());
    }

    #[test]
    fn codes_must_match_exactly() {
        assert_eq!(
            " ES ".parse::<Locale>(),
            Err(LocaleError::Unsupported(" ES ".to_string()))
        );
        assert!("ES".parse::<Locale>().is_err());
        assert!("en ".parse::<Locale>().is_err());
    }

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(Locale::En.toggled(), Locale::Es);
        assert_eq!(Locale::Es.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().to_string(), "en");
    }
}
