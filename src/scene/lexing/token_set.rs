//! Token set builder
//!
//! Builds the complete vocabulary of one locale: the locale independent common tokens plus one
//! keyword or numeral token per dictionary concept. Every definition is an anchored regex that
//! is only ever run against the remaining input, so a match always starts at the cursor.

use crate::scene::locales::{dictionary::longest_first, Dictionary, Locale};
use crate::scene::lexing::tokens::{Keyword, Numeral, TokenKind};
use regex::Regex;

/// Letters, space and the punctuation allowed in free text. `/` is added separately so that a
/// `//` comment is never swallowed by a caption.
const NATURAL_CHARS: &str = r"a-zA-Zа-яА-ЯёЁ ,.()'\-";

const LINE_END: &str = r"^[ \t?]*\r?\n";
const WHITE_SPACE: &str = r"^[^\S\r\n]+";
const COMMENT: &str = r"^//[^\r\n]*";
const NUMBER_LITERAL: &str = r"^-?(?:0|[1-9]\d*)(?:\.\d+)?(?:[eE][+-]?\d+)?";
const STRING_LITERAL: &str = r#"^["«»](?:[^\n\r"\\]|\\.)*["«»]"#;
const VARIABLE: &str = r#"^<(?:[^\n\r"\\]|\\.)*>"#;
const COMMA: &str = r"^,";
const COLON: &str = r"^:";

/// How a definition decides the length of its match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchLength {
    /// The whole match
    Full,
    /// The end of the first capture group that took part in the match. Used by keywords, whose
    /// pattern peeks at the character after the word without consuming it.
    FirstGroup,
}

/// A named terminal and its anchored pattern
#[derive(Debug, Clone)]
pub struct TokenDefinition {
    pub kind: TokenKind,
    pattern: Regex,
    length: MatchLength,
    catch_all: bool,
}

impl TokenDefinition {
    fn simple(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
            length: MatchLength::Full,
            catch_all: false,
        })
    }

    fn catch_all(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            catch_all: true,
            ..Self::simple(kind, pattern)?
        })
    }

    /// Keyword or numeral definition: the alternation of all surface forms of one concept.
    fn word(kind: TokenKind, forms: &[&str], dictionary: &Dictionary) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = longest_first(forms)
            .into_iter()
            .map(|form| {
                let fragment = dictionary.build_pattern_from_word(form);
                if form.chars().last().is_some_and(char::is_alphabetic) {
                    format!(r"({fragment})(?:\P{{L}}|$)")
                } else {
                    format!("({fragment})")
                }
            })
            .collect();
        Ok(Self {
            kind,
            pattern: Regex::new(&format!("^(?:{})", alternatives.join("|")))?,
            length: MatchLength::FirstGroup,
            catch_all: false,
        })
    }

    /// The catch-all only applies when no other definition matched.
    pub fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Byte length of the match at the start of `rest`, if any. Empty matches do not count.
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        let length = match self.length {
            MatchLength::Full => self.pattern.find(rest)?.end(),
            MatchLength::FirstGroup => {
                let captures = self.pattern.captures(rest)?;
                captures.iter().skip(1).flatten().next()?.end()
            }
        };
        (length > 0).then_some(length)
    }
}

/// The vocabulary of one locale, grouped the way it is built
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub locale: Locale,
    pub common: Vec<TokenDefinition>,
    pub keywords: Vec<TokenDefinition>,
    pub numerals: Vec<TokenDefinition>,
}

impl TokenSet {
    /// All definitions in lexer registration order: common tokens, keywords, numerals and the
    /// catch-all last.
    pub fn definitions(&self) -> impl Iterator<Item = &TokenDefinition> {
        let regular = self.common.iter().filter(|definition| !definition.catch_all);
        let catch_all = self.common.iter().filter(|definition| definition.catch_all);
        regular
            .chain(self.keywords.iter())
            .chain(self.numerals.iter())
            .chain(catch_all)
    }

    pub fn definition(&self, kind: TokenKind) -> Option<&TokenDefinition> {
        self.definitions().find(|definition| definition.kind == kind)
    }
}

/// Build the token vocabulary of `locale` from its dictionary.
///
/// Dictionaries are constants, so an error here means a dictionary form produced an invalid
/// pattern.
pub fn build_tokens_for_locale(locale: Locale) -> Result<TokenSet, regex::Error> {
    let dictionary = locale.dictionary();

    let common = vec![
        TokenDefinition::simple(TokenKind::LineEnd, LINE_END)?,
        TokenDefinition::simple(TokenKind::WhiteSpace, WHITE_SPACE)?,
        TokenDefinition::simple(TokenKind::Comment, COMMENT)?,
        TokenDefinition::simple(TokenKind::NumberLiteral, NUMBER_LITERAL)?,
        TokenDefinition::simple(TokenKind::StringLiteral, STRING_LITERAL)?,
        TokenDefinition::simple(TokenKind::Variable, VARIABLE)?,
        TokenDefinition::simple(TokenKind::Comma, COMMA)?,
        TokenDefinition::simple(TokenKind::Colon, COLON)?,
        TokenDefinition::catch_all(
            TokenKind::NaturalLiteral,
            &format!("^(?:[{NATURAL_CHARS}]|/[{NATURAL_CHARS}])+"),
        )?,
    ];

    let keywords = Keyword::ALL
        .into_iter()
        .map(|keyword| {
            TokenDefinition::word(
                TokenKind::Keyword(keyword),
                dictionary.keyword_forms(keyword),
                dictionary,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let numerals = Numeral::ALL
        .into_iter()
        .map(|numeral| {
            TokenDefinition::word(
                TokenKind::Numeral(numeral),
                dictionary.numeral_forms(numeral),
                dictionary,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TokenSet {
        locale,
        common,
        keywords,
        numerals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> TokenSet {
        build_tokens_for_locale(Locale::EnUs).unwrap()
    }

    #[test]
    fn test_registration_order() {
        let tokens = english();
        let kinds: Vec<TokenKind> = tokens.definitions().map(|d| d.kind).collect();
        assert_eq!(kinds[0], TokenKind::LineEnd);
        assert_eq!(kinds[1], TokenKind::WhiteSpace);
        assert_eq!(kinds[2], TokenKind::Comment);
        assert_eq!(kinds.last(), Some(&TokenKind::NaturalLiteral));
        assert_eq!(kinds.len(), 8 + Keyword::ALL.len() + Numeral::ALL.len() + 1);
        assert!(tokens.definitions().last().unwrap().is_catch_all());
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let tokens = english();
        let list = tokens.definition(TokenKind::Keyword(Keyword::List)).unwrap();
        assert_eq!(list.match_at("List of items"), Some(4));
        assert_eq!(list.match_at("list\n"), Some(4));
        assert_eq!(list.match_at("list"), Some(4));
        assert_eq!(list.match_at("Listing"), None);
    }

    #[test]
    fn test_keyword_prefers_longest_form() {
        let tokens = english();
        let button = tokens.definition(TokenKind::Keyword(Keyword::Button)).unwrap();
        assert_eq!(button.match_at("link to Home"), Some(7));
        assert_eq!(button.match_at("link topics"), Some(4));
    }

    #[test]
    fn test_form_ending_in_punctuation_has_no_boundary() {
        let tokens = english();
        let page = tokens.definition(TokenKind::Keyword(Keyword::Page)).unwrap();
        assert_eq!(page.match_at("Page:Login"), Some(5));
    }

    #[test]
    fn test_line_end_takes_trailing_blanks_and_question_marks() {
        let tokens = english();
        let line_end = tokens.definition(TokenKind::LineEnd).unwrap();
        assert_eq!(line_end.match_at("  ?\n"), Some(4));
        assert_eq!(line_end.match_at("\r\n\n"), Some(2));
        assert_eq!(line_end.match_at("  "), None);
    }

    #[test]
    fn test_literals() {
        let tokens = english();
        let string = tokens.definition(TokenKind::StringLiteral).unwrap();
        assert_eq!(string.match_at(r#""Say \"hi\"" rest"#), Some(12));
        assert_eq!("«Вход»".len(), string.match_at("«Вход»").unwrap());
        let variable = tokens.definition(TokenKind::Variable).unwrap();
        assert_eq!(variable.match_at("<user name>\n"), Some(11));
        let number = tokens.definition(TokenKind::NumberLiteral).unwrap();
        assert_eq!(number.match_at("12 columns"), Some(2));
        assert_eq!(number.match_at("-1.5e3"), Some(6));
    }

    #[test]
    fn test_natural_literal_stops_at_comment() {
        let tokens = english();
        let natural = tokens.definition(TokenKind::NaturalLiteral).unwrap();
        assert_eq!(natural.match_at("Sign in // todo"), Some(8));
        assert_eq!(natural.match_at("Terms/Conditions\n"), Some(16));
        assert_eq!(natural.match_at("\n"), None);
    }
}
