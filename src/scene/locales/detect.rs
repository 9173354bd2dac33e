//! Locale detection
//!
//! A scene never declares its language. Every page starts with a page keyword, so the locale
//! whose page keyword shows up first in the text is the locale of the scene.

use super::Locale;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_TESTERS: Lazy<Vec<(Locale, Regex)>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| {
            let tester = locale
                .dictionary()
                .page_pattern()
                .unwrap_or_else(|err| panic!("page keyword pattern for {locale} is invalid: {err}"));
            (locale, tester)
        })
        .collect()
});

/// Detect the locale of a scene from its earliest page keyword.
///
/// Ties (two locales matching at the same offset) go to the locale registered first.
pub fn detect_locale(text: &str) -> Option<Locale> {
    let detected = PAGE_TESTERS
        .iter()
        .filter_map(|(locale, tester)| tester.find(text).map(|found| (*locale, found.start())))
        .min_by_key(|(_, offset)| *offset)
        .map(|(locale, _)| locale);

    match detected {
        Some(locale) => debug!("detected locale {locale}"),
        None => debug!("no page keyword found, locale undetected"),
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        assert_eq!(detect_locale("Page: Login\n"), Some(Locale::EnUs));
        assert_eq!(detect_locale("screen: Login\n"), Some(Locale::EnUs));
    }

    #[test]
    fn test_detects_russian() {
        assert_eq!(detect_locale("Экран: Вход\n"), Some(Locale::RuRu));
        assert_eq!(detect_locale("СТРАНИЦА: Вход\n"), Some(Locale::RuRu));
    }

    #[test]
    fn test_earliest_page_keyword_wins() {
        let text = "Экран: Вход\nPage: Login\n";
        assert_eq!(detect_locale(text), Some(Locale::RuRu));
        let text = "// comment\nPage: Login\nЭкран: Вход\n";
        assert_eq!(detect_locale(text), Some(Locale::EnUs));
    }

    #[test]
    fn test_no_page_keyword() {
        assert_eq!(detect_locale(""), None);
        assert_eq!(detect_locale("Block: Form\n"), None);
        assert_eq!(detect_locale("Page Login\n"), None);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let text = "Mobile Page: Home\n";
        assert_eq!(detect_locale(text), detect_locale(text));
    }
}
