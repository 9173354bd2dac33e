//! Locale dictionary: canonical concepts to surface word forms
//!
//! A dictionary is pure data. The only behavior it carries is the pattern builder, which turns
//! one surface form into a regex fragment:
//!
//! - matching is case-insensitive (Unicode aware, so Cyrillic case folds too)
//! - a space inside a form matches any run of spaces or tabs ("consists  of")
//! - letters listed in the locale's equivalence table match each other ("трём" matches "трем")

use super::Locale;
use crate::scene::lexing::tokens::{Keyword, Numeral};
use regex::Regex;

/// Surface forms of one concept
pub type WordForms = &'static [&'static str];

#[derive(Debug)]
pub struct Dictionary {
    pub locale: Locale,
    pub numerals: &'static [(Numeral, WordForms)],
    pub keywords: &'static [(Keyword, WordForms)],
    /// Groups of letters that are interchangeable when matching
    pub letter_equivalents: &'static [&'static [char]],
}

impl Dictionary {
    pub fn keyword_forms(&self, keyword: Keyword) -> WordForms {
        self.keywords
            .iter()
            .find(|(candidate, _)| *candidate == keyword)
            .map(|(_, forms)| *forms)
            .unwrap_or(&[])
    }

    pub fn numeral_forms(&self, numeral: Numeral) -> WordForms {
        self.numerals
            .iter()
            .find(|(candidate, _)| *candidate == numeral)
            .map(|(_, forms)| *forms)
            .unwrap_or(&[])
    }

    /// Turn a single surface form into a self-contained, case-insensitive regex fragment.
    pub fn build_pattern_from_word(&self, word: &str) -> String {
        let parts: Vec<String> = word
            .split_whitespace()
            .map(|part| part.chars().map(|ch| self.char_pattern(ch)).collect())
            .collect();
        format!("(?i:{})", parts.join("[ \\t]+"))
    }

    fn char_pattern(&self, ch: char) -> String {
        match self
            .letter_equivalents
            .iter()
            .find(|group| group.contains(&ch))
        {
            Some(group) => format!("[{}]", group.iter().collect::<String>()),
            None => regex::escape(ch.encode_utf8(&mut [0; 4])),
        }
    }

    /// Unanchored regex matching any form of the page keyword; the anchor used by locale
    /// detection.
    pub fn page_pattern(&self) -> Result<Regex, regex::Error> {
        build_regex_from_words(self.keyword_forms(Keyword::Page), self)
    }
}

/// Alternation of all `words`, each run through the dictionary's pattern builder.
///
/// Longer forms come first so that the regex prefers "поле ввода" over "поле".
pub fn build_regex_from_words(words: &[&str], dictionary: &Dictionary) -> Result<Regex, regex::Error> {
    Regex::new(&alternation(words, dictionary))
}

pub(crate) fn alternation(words: &[&str], dictionary: &Dictionary) -> String {
    longest_first(words)
        .into_iter()
        .map(|word| dictionary.build_pattern_from_word(word))
        .collect::<Vec<_>>()
        .join("|")
}

pub(crate) fn longest_first<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = words.to_vec();
    sorted.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    sorted
}
