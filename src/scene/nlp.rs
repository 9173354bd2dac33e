//! Case normalization for captions
//!
//! Russian scene authors write items the way they would say them: "Поле ввода пароля" (a field
//! for entering *of the password*). The wireframe should show "пароль". Turning a genitive
//! phrase back to the nominative needs a morphological dictionary, which this crate does not
//! ship: the renderer is handed a [CaseNormalizer] instead. The parser never uses one.

use crate::scene::locales::Locale;
use std::collections::HashMap;

/// Conjunctions after which a phrase starts a new noun group
const CONJUNCTIONS: &[&str] = &["или", "и", "or", "and"];

pub trait CaseNormalizer: Send + Sync {
    fn locale(&self) -> Locale;

    /// Normalize a phrase to the nominative case. Only the head of each noun group is touched:
    /// the first word, and every word following a conjunction.
    fn to_nominative_case(&self, phrase: &str) -> String;
}

/// Leaves phrases as they are. Used for languages without cases.
#[derive(Debug, Clone, Copy)]
pub struct Verbatim {
    locale: Locale,
}

impl Verbatim {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl CaseNormalizer for Verbatim {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn to_nominative_case(&self, phrase: &str) -> String {
        phrase.to_string()
    }
}

/// A normalizer backed by a table of inflected forms
#[derive(Debug, Clone)]
pub struct WordTable {
    locale: Locale,
    nominatives: HashMap<String, String>,
}

impl WordTable {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            nominatives: HashMap::new(),
        }
    }

    /// Register the nominative of an inflected form. Lookups ignore case.
    pub fn with_word(mut self, form: &str, nominative: &str) -> Self {
        self.nominatives
            .insert(form.to_lowercase(), nominative.to_string());
        self
    }

    /// A table of the genitive forms that show up most in Russian form scenes
    pub fn russian_basics() -> Self {
        [
            ("пароля", "пароль"),
            ("логина", "логин"),
            ("почты", "почта"),
            ("телефона", "телефон"),
            ("имени", "имя"),
            ("фамилии", "фамилия"),
            ("адреса", "адрес"),
            ("поиска", "поиск"),
            ("сообщения", "сообщение"),
            ("комментария", "комментарий"),
            ("даты", "дата"),
            ("города", "город"),
        ]
        .into_iter()
        .fold(Self::new(Locale::RuRu), |table, (form, nominative)| {
            table.with_word(form, nominative)
        })
    }

    fn normalize_word(&self, word: &str) -> String {
        match self.nominatives.get(&word.to_lowercase()) {
            Some(nominative) => nominative.clone(),
            None => word.to_string(),
        }
    }
}

impl CaseNormalizer for WordTable {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn to_nominative_case(&self, phrase: &str) -> String {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                let heads_group = index == 0
                    || CONJUNCTIONS.contains(&words[index - 1].to_lowercase().as_str());
                if heads_group {
                    self.normalize_word(word)
                } else {
                    word.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_keeps_phrase() {
        let normalizer = Verbatim::new(Locale::EnUs);
        assert_eq!(normalizer.to_nominative_case("Password"), "Password");
        assert_eq!(normalizer.locale(), Locale::EnUs);
    }

    #[test]
    fn test_table_normalizes_group_heads() {
        let table = WordTable::russian_basics();
        assert_eq!(table.to_nominative_case("пароля"), "пароль");
        assert_eq!(table.to_nominative_case("Логина или почты"), "логин или почта");
    }

    #[test]
    fn test_table_leaves_other_words() {
        let table = WordTable::russian_basics();
        // only the head of the group is normalized
        assert_eq!(table.to_nominative_case("почты пароля"), "почта пароля");
        assert_eq!(table.to_nominative_case("сообщения"), "сообщение");
        assert_eq!(table.to_nominative_case("кнопки"), "кнопки");
    }
}
