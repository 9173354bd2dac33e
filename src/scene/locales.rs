//! Locales and their keyword dictionaries
//!
//! Every supported language has a [Dictionary] that maps the canonical concepts of the scene
//! language (page, block, button, three, ...) to the surface forms users write. The lexer's
//! vocabulary is generated from it, so adding a language means adding a dictionary: the grammar
//! stays the same.
//!
//! The locale of a scene is not declared, it is detected from the first page keyword found in
//! the text, see [detect_locale].

pub mod detect;
pub mod dictionary;
pub mod en_us;
pub mod ru_ru;

pub use detect::detect_locale;
pub use dictionary::{build_regex_from_words, Dictionary};

use crate::scene::error::SceneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported scene language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "en_US")]
    EnUs,
}

impl Locale {
    /// Registration order. Locale detection breaks ties in this order.
    pub const ALL: [Locale; 2] = [Locale::RuRu, Locale::EnUs];

    pub fn id(self) -> &'static str {
        match self {
            Locale::RuRu => "ru_RU",
            Locale::EnUs => "en_US",
        }
    }

    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Locale::RuRu => &ru_ru::DICTIONARY,
            Locale::EnUs => &en_us::DICTIONARY,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Locale {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| {
                let id = locale.id();
                id.eq_ignore_ascii_case(s) || id.replace('_', "-").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| SceneError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_ids_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.id().parse::<Locale>().unwrap(), locale);
            assert_eq!(locale.dictionary().locale, locale);
        }
    }

    #[test]
    fn test_locale_parsing_is_lenient_about_case_and_separator() {
        assert_eq!("en-us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("RU_ru".parse::<Locale>().unwrap(), Locale::RuRu);
        assert!("de_DE".parse::<Locale>().is_err());
    }
}
