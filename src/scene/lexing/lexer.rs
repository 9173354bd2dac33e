//! Scene lexer
//!
//! A straightforward maximal-munch scanner over the definitions of a [TokenSet]. Positions are
//! tracked while scanning, so every token knows its exact start and end.
//!
//! Whitespace and comments never reach the parser. A comment on a line of its own takes the
//! line end with it, so commenting out a line inside a list does not end the list.

use crate::scene::cst::range::{Position, Range};
use crate::scene::error::LexError;
use crate::scene::lexing::token_set::TokenSet;
use crate::scene::lexing::tokens::{Token, TokenKind};
use crate::scene::locales::Locale;
use log::trace;

/// Everything the lexer produced for one text
#[derive(Debug, Clone, Default)]
pub struct LexOutput {
    /// Tokens for the parser, without whitespace and comments
    pub tokens: Vec<Token>,
    pub comments: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A run of characters no definition matched
struct Unmatched {
    offset: usize,
    position: Position,
    first: char,
    chars: usize,
    length: usize,
}

impl Unmatched {
    fn into_error(self) -> LexError {
        LexError {
            line: self.position.line,
            column: self.position.column,
            offset: self.offset,
            length: self.length,
            message: format!(
                "unexpected character: ->{}<- at offset: {}, skipped {} characters.",
                self.first, self.offset, self.chars
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneLexer {
    token_set: TokenSet,
}

impl SceneLexer {
    pub fn new(token_set: TokenSet) -> Self {
        Self { token_set }
    }

    pub fn locale(&self) -> Locale {
        self.token_set.locale
    }

    pub fn token_set(&self) -> &TokenSet {
        &self.token_set
    }

    pub fn tokenize(&self, text: &str) -> LexOutput {
        let mut output = LexOutput::default();
        let mut offset = 0;
        let mut position = Position::default();
        let mut unmatched: Option<Unmatched> = None;
        // a line holding nothing but a comment leaves no line end behind
        let mut line_has_tokens = false;
        let mut comment_line = false;

        while offset < text.len() {
            let rest = &text[offset..];
            if let Some((kind, length)) = self.longest_match(rest) {
                if let Some(run) = unmatched.take() {
                    output.errors.push(run.into_error());
                }
                let image = &rest[..length];
                let end = position.advance(image);
                let range = Range::new(offset..offset + length, position, end);
                let token = Token::new(kind, image, range);
                match kind {
                    TokenKind::Comment => {
                        comment_line = !line_has_tokens;
                        output.comments.push(token);
                    }
                    TokenKind::WhiteSpace => {}
                    TokenKind::LineEnd => {
                        if !comment_line {
                            output.tokens.push(token);
                        }
                        line_has_tokens = false;
                        comment_line = false;
                    }
                    _ => {
                        line_has_tokens = true;
                        output.tokens.push(token);
                    }
                }
                offset += length;
                position = end;
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            trace!("skipping unexpected {ch:?} at {position}");
            let run = unmatched.get_or_insert_with(|| Unmatched {
                offset,
                position,
                first: ch,
                chars: 0,
                length: 0,
            });
            run.chars += 1;
            run.length += ch.len_utf8();
            position = position.advance(ch.encode_utf8(&mut [0; 4]));
            offset += ch.len_utf8();
        }

        if let Some(run) = unmatched.take() {
            output.errors.push(run.into_error());
        }
        output
    }

    /// Longest regular match at the start of `rest`, falling back to the catch-all.
    fn longest_match(&self, rest: &str) -> Option<(TokenKind, usize)> {
        let mut best: Option<(TokenKind, usize)> = None;
        for definition in self.token_set.definitions().filter(|d| !d.is_catch_all()) {
            if let Some(length) = definition.match_at(rest) {
                if best.map_or(true, |(_, longest)| length > longest) {
                    best = Some((definition.kind, length));
                }
            }
        }
        best.or_else(|| {
            self.token_set
                .definitions()
                .filter(|d| d.is_catch_all())
                .find_map(|d| d.match_at(rest).map(|length| (d.kind, length)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::lexing::token_set::build_tokens_for_locale;
    use crate::scene::lexing::tokens::{Keyword, Numeral};

    fn lex(locale: Locale, text: &str) -> LexOutput {
        SceneLexer::new(build_tokens_for_locale(locale).unwrap()).tokenize(text)
    }

    fn kinds(output: &LexOutput) -> Vec<TokenKind> {
        output.tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_english_page() {
        let output = lex(Locale::EnUs, "Mobile page: Login\nBlock: Form\n    Button \"Submit\"\n");
        assert!(!output.has_errors());
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Keyword(Keyword::Mobile),
                TokenKind::Keyword(Keyword::Page),
                TokenKind::NaturalLiteral,
                TokenKind::LineEnd,
                TokenKind::Keyword(Keyword::Block),
                TokenKind::NaturalLiteral,
                TokenKind::LineEnd,
                TokenKind::Keyword(Keyword::Button),
                TokenKind::StringLiteral,
                TokenKind::LineEnd,
            ]
        );
        assert_eq!(output.tokens[2].image, "Login");
        assert_eq!(output.tokens[8].image, "\"Submit\"");
    }

    #[test]
    fn test_tokenize_russian_direction() {
        let output = lex(Locale::RuRu, "Три столбца\n");
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Numeral(Numeral::Three),
                TokenKind::Keyword(Keyword::Columns),
                TokenKind::LineEnd,
            ]
        );
    }

    #[test]
    fn test_positions_count_characters() {
        let output = lex(Locale::RuRu, "Экран: Вход\nБлок: Форма\n");
        let title = &output.tokens[1];
        assert_eq!(title.image, "Вход");
        assert_eq!((title.line(), title.column()), (1, 8));
        assert_eq!(title.offset(), "Экран: ".len());
        assert_eq!(title.length(), "Вход".len());
        assert_eq!((title.range.end.line, title.range.end.column), (1, 12));
        let block = &output.tokens[3];
        assert_eq!((block.line(), block.column()), (2, 1));
    }

    #[test]
    fn test_blank_lines_produce_line_ends() {
        let output = lex(Locale::EnUs, "Page: A\n\n\n");
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Keyword(Keyword::Page),
                TokenKind::NaturalLiteral,
                TokenKind::LineEnd,
                TokenKind::LineEnd,
                TokenKind::LineEnd,
            ]
        );
    }

    #[test]
    fn test_comments_are_trivia() {
        let output = lex(Locale::EnUs, "// draft\nPage: A // main\n");
        assert_eq!(output.comments.len(), 2);
        assert_eq!(output.comments[0].image, "// draft");
        assert_eq!(output.comments[1].image, "// main");
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Keyword(Keyword::Page),
                TokenKind::NaturalLiteral,
                TokenKind::LineEnd,
            ]
        );
        assert_eq!(output.tokens[1].image, "A ");
    }

    #[test]
    fn test_comment_line_leaves_no_line_end() {
        let output = lex(Locale::EnUs, "Button
    // later
Button
");
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Keyword(Keyword::Button),
                TokenKind::LineEnd,
                TokenKind::Keyword(Keyword::Button),
                TokenKind::LineEnd,
            ]
        );
    }

    #[test]
    fn test_unmatched_run_is_one_error() {
        let output = lex(Locale::EnUs, "Page: A\n#$%\nBlock: B\n");
        assert_eq!(output.errors.len(), 1);
        let error = &output.errors[0];
        assert_eq!((error.line, error.column, error.offset, error.length), (2, 1, 8, 3));
        assert_eq!(
            error.message,
            "unexpected character: ->#<- at offset: 8, skipped 3 characters."
        );
        // lexing resumed after the run
        assert!(output
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::Keyword(Keyword::Block)));
    }

    #[test]
    fn test_separate_runs_are_separate_errors() {
        let output = lex(Locale::EnUs, "Page: A # B $\n");
        assert_eq!(output.errors.len(), 2);
        assert_eq!(output.errors[0].offset, 8);
        assert_eq!(output.errors[1].offset, 12);
    }

    #[test]
    fn test_free_text_runs_to_the_end_of_the_line() {
        // the catch-all is only tried at the start of the run, later keywords are caption text
        let output = lex(Locale::RuRu, "В три столбца\n");
        assert_eq!(kinds(&output), vec![TokenKind::NaturalLiteral, TokenKind::LineEnd]);
    }

    #[test]
    fn test_keyword_boundary_falls_back_to_free_text() {
        let output = lex(Locale::EnUs, "Listing\n");
        assert_eq!(output.tokens[0].kind, TokenKind::NaturalLiteral);
        assert_eq!(output.tokens[0].image, "Listing");
    }
}
