//! Parsing entry points
//!
//! [parse_scene_to_ast] runs the whole pipeline on text that already ends with a newline and
//! is what editors and renderers call. [SceneProcessor] does the same under a
//! [ParsingConfig]: it can append the missing newline, force a locale and cap the number of
//! parse errors.

use crate::scene::cache;
use crate::scene::config::{LocalePreference, ParsingConfig};
use crate::scene::cst::elements::{Comment, Scene};
use crate::scene::ensure_source_ends_with_newline;
use crate::scene::error::{LexError, ParseError};
use crate::scene::lexing::tokens::{Keyword, Token};
use crate::scene::locales::{detect_locale, Locale};
use log::debug;
use serde::Serialize;
use std::borrow::Cow;

/// Outcome of parsing a scene
///
/// Lex errors are terminal: no tree is built from text the lexer could not read. Parse errors
/// still come with the tokens so that editors can highlight the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseResult {
    Success {
        locale: Locale,
        scene: Scene,
        tokens: Vec<Token>,
    },
    LexErrors {
        errors: Vec<LexError>,
    },
    ParseErrors {
        locale: Locale,
        errors: Vec<ParseError>,
        tokens: Vec<Token>,
    },
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// The locale the scene was parsed with, if it got that far
    pub fn locale(&self) -> Option<Locale> {
        match self {
            ParseResult::Success { locale, .. } | ParseResult::ParseErrors { locale, .. } => {
                Some(*locale)
            }
            ParseResult::LexErrors { .. } => None,
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        match self {
            ParseResult::Success { scene, .. } => Some(scene),
            _ => None,
        }
    }

    pub fn into_scene(self) -> Option<Scene> {
        match self {
            ParseResult::Success { scene, .. } => Some(scene),
            _ => None,
        }
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            ParseResult::Success { tokens, .. } | ParseResult::ParseErrors { tokens, .. } => {
                Some(tokens)
            }
            ParseResult::LexErrors { .. } => None,
        }
    }

    /// One `line:column: message` line per error, in source order
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            ParseResult::Success { .. } => Vec::new(),
            ParseResult::LexErrors { errors } => errors.iter().map(ToString::to_string).collect(),
            ParseResult::ParseErrors { errors, .. } => {
                errors.iter().map(ToString::to_string).collect()
            }
        }
    }
}

/// Parse scene text with the default settings.
///
/// The text must end with a newline, see
/// [ensure_source_ends_with_newline](crate::scene::ensure_source_ends_with_newline).
pub fn parse_scene_to_ast(text: &str) -> ParseResult {
    let config = ParsingConfig {
        ensure_trailing_newline: false,
        ..ParsingConfig::default()
    };
    SceneProcessor::new(config).parse(text)
}

/// Parses scenes under a [ParsingConfig]
#[derive(Debug, Clone, Default)]
pub struct SceneProcessor {
    config: ParsingConfig,
}

impl SceneProcessor {
    pub fn new(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// The locale this processor would parse `text` with
    pub fn resolve_locale(&self, text: &str) -> Option<Locale> {
        match self.config.locale {
            LocalePreference::Fixed(locale) => Some(locale),
            LocalePreference::Auto => detect_locale(text),
        }
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        let source: Cow<'_, str> = if self.config.ensure_trailing_newline {
            Cow::Owned(ensure_source_ends_with_newline(text))
        } else {
            Cow::Borrowed(text)
        };

        let Some(locale) = self.resolve_locale(&source) else {
            debug!("no page keyword found, cannot detect the locale");
            return ParseResult::LexErrors {
                errors: vec![locale_not_detected()],
            };
        };

        let compiled = cache::compiled(locale);
        let lexed = compiled.lexer.tokenize(&source);
        if lexed.has_errors() {
            debug!("{} lex errors ({})", lexed.errors.len(), locale);
            return ParseResult::LexErrors {
                errors: lexed.errors,
            };
        }

        let parsed = compiled
            .grammar
            .parse_tokens_with_limit(&lexed.tokens, self.config.max_parse_errors);
        if parsed.has_errors() {
            return ParseResult::ParseErrors {
                locale,
                errors: parsed.errors,
                tokens: lexed.tokens,
            };
        }

        let mut scene = parsed.scene;
        scene.comments = lexed
            .comments
            .into_iter()
            .map(|token| Comment { token })
            .collect();
        ParseResult::Success {
            locale,
            scene,
            tokens: lexed.tokens,
        }
    }
}

fn locale_not_detected() -> LexError {
    let page_keywords: Vec<String> = Locale::ALL
        .into_iter()
        .flat_map(|locale| locale.dictionary().keyword_forms(Keyword::Page).iter())
        .map(|form| format!("{form:?}"))
        .collect();
    LexError {
        line: 1,
        column: 1,
        offset: 0,
        length: 0,
        message: format!(
            "cannot detect the scene locale: no page keyword found, expected one of {}",
            page_keywords.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::cst::elements::ItemKind;
    use crate::scene::lexing::tokens::TokenKind;

    #[test]
    fn test_parses_english_scene() {
        let result = parse_scene_to_ast("Screen: Login\nBlock: Form\n    Button \"Submit\"\n");
        assert!(result.is_success(), "{:?}", result.diagnostics());
        assert_eq!(result.locale(), Some(Locale::EnUs));

        let scene = result.scene().unwrap();
        assert_eq!(scene.pages.len(), 1);
        let page = &scene.pages[0];
        assert_eq!(page.title(), "Login");
        let blocks: Vec<_> = page.all_blocks().collect();
        assert_eq!(blocks.len(), 1);
        let items: Vec<_> = blocks[0].elements.iter().flat_map(|group| group.items()).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind(), Some(ItemKind::Button));
        assert_eq!(items[0].text().as_deref(), Some("Submit"));
    }

    #[test]
    fn test_missing_page_keyword() {
        let result = parse_scene_to_ast("Block: Form\n");
        match result {
            ParseResult::LexErrors { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.contains("locale"));
                assert_eq!((errors[0].line, errors[0].column, errors[0].length), (1, 1, 0));
            }
            other => panic!("expected lex errors, got {other:?}"),
        }
    }

    #[test]
    fn test_lex_errors_suppress_tree() {
        let result = parse_scene_to_ast("Page: Login\nButton #1\n");
        assert!(matches!(result, ParseResult::LexErrors { .. }));
        assert!(result.scene().is_none());
        assert!(result.tokens().is_none());
    }

    #[test]
    fn test_parse_errors_keep_tokens() {
        let result = parse_scene_to_ast("Page: Login\nBlock: Form\n    Columns Columns\n");
        match &result {
            ParseResult::ParseErrors { locale, errors, tokens } => {
                assert_eq!(*locale, Locale::EnUs);
                assert!(!errors.is_empty());
                assert!(!tokens.is_empty());
            }
            other => panic!("expected parse errors, got {other:?}"),
        }
        assert_eq!(result.diagnostics().len(), result_error_count(&result));
    }

    fn result_error_count(result: &ParseResult) -> usize {
        match result {
            ParseResult::ParseErrors { errors, .. } => errors.len(),
            ParseResult::LexErrors { errors } => errors.len(),
            ParseResult::Success { .. } => 0,
        }
    }

    #[test]
    fn test_processor_appends_newline() {
        let processor = SceneProcessor::default();
        let result = processor.parse("Page: Login");
        assert!(result.is_success(), "{:?}", result.diagnostics());
    }

    #[test]
    fn test_processor_forced_locale() {
        let processor = SceneProcessor::new(ParsingConfig {
            locale: LocalePreference::Fixed(Locale::RuRu),
            ..ParsingConfig::default()
        });
        // English keywords are free text to the Russian lexer, so there is no page header
        let result = processor.parse("Page: Login\n");
        assert_eq!(result.locale(), Some(Locale::RuRu));
        assert!(!result.is_success());
    }

    #[test]
    fn test_comments_are_attached() {
        let result = parse_scene_to_ast("// login flow\nPage: Login\n");
        let scene = result.scene().unwrap();
        assert_eq!(scene.comments.len(), 1);
        assert_eq!(scene.comments[0].token.kind, TokenKind::Comment);
    }

    #[test]
    fn test_result_serializes_with_status() {
        let result = parse_scene_to_ast("Page: Login\n");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["locale"], "en_US");
    }
}
