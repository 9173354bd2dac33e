//! Token types shared by the token set builder, the lexer and the parser.
//!
//! Token Layers
//!
//!     Common Tokens:
//!         Locale independent: literals, punctuation, line ends, whitespace and comments.
//!
//!     Keyword Tokens:
//!         One per canonical concept of the language (page, block, button, rows...). Their
//!         surface forms come from the locale dictionary, so "Button" and "Кнопка" both lex to
//!         [Keyword::Button].
//!
//!     Numeral Tokens:
//!         Number words zero to twelve. Layout counts are limited to a 12-column system, so
//!         anything larger can only be written with digits and is rejected by the parser.

use crate::scene::cst::range::{Position, Range};
use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical keyword concepts of the scene language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    Page,
    Mobile,
    Tablet,
    Widescreen,
    Block,
    Blocks,
    Field,
    Button,
    Header,
    List,
    Image,
    Space,
    ConsistsOf,
    Aligned,
    WithIcon,
    Rows,
    Columns,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Keyword {
    pub const ALL: [Keyword; 22] = [
        Keyword::Page,
        Keyword::Mobile,
        Keyword::Tablet,
        Keyword::Widescreen,
        Keyword::Block,
        Keyword::Blocks,
        Keyword::Field,
        Keyword::Button,
        Keyword::Header,
        Keyword::List,
        Keyword::Image,
        Keyword::Space,
        Keyword::ConsistsOf,
        Keyword::Aligned,
        Keyword::WithIcon,
        Keyword::Rows,
        Keyword::Columns,
        Keyword::Top,
        Keyword::Bottom,
        Keyword::Left,
        Keyword::Right,
        Keyword::Center,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Keyword::Page => "Page",
            Keyword::Mobile => "Mobile",
            Keyword::Tablet => "Tablet",
            Keyword::Widescreen => "Widescreen",
            Keyword::Block => "Block",
            Keyword::Blocks => "Blocks",
            Keyword::Field => "Field",
            Keyword::Button => "Button",
            Keyword::Header => "Header",
            Keyword::List => "List",
            Keyword::Image => "Image",
            Keyword::Space => "Space",
            Keyword::ConsistsOf => "ConsistsOf",
            Keyword::Aligned => "Aligned",
            Keyword::WithIcon => "WithIcon",
            Keyword::Rows => "Rows",
            Keyword::Columns => "Columns",
            Keyword::Top => "Top",
            Keyword::Bottom => "Bottom",
            Keyword::Left => "Left",
            Keyword::Right => "Right",
            Keyword::Center => "Center",
        }
    }
}

/// Number words, zero to twelve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Numeral {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Numeral {
    pub const ALL: [Numeral; 13] = [
        Numeral::Zero,
        Numeral::One,
        Numeral::Two,
        Numeral::Three,
        Numeral::Four,
        Numeral::Five,
        Numeral::Six,
        Numeral::Seven,
        Numeral::Eight,
        Numeral::Nine,
        Numeral::Ten,
        Numeral::Eleven,
        Numeral::Twelve,
    ];

    /// The magnitude this word stands for
    pub fn value(self) -> u8 {
        match self {
            Numeral::Zero => 0,
            Numeral::One => 1,
            Numeral::Two => 2,
            Numeral::Three => 3,
            Numeral::Four => 4,
            Numeral::Five => 5,
            Numeral::Six => 6,
            Numeral::Seven => 7,
            Numeral::Eight => 8,
            Numeral::Nine => 9,
            Numeral::Ten => 10,
            Numeral::Eleven => 11,
            Numeral::Twelve => 12,
        }
    }

    pub fn from_value(value: u8) -> Option<Numeral> {
        Numeral::ALL.get(usize::from(value)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Numeral::Zero => "Zero",
            Numeral::One => "One",
            Numeral::Two => "Two",
            Numeral::Three => "Three",
            Numeral::Four => "Four",
            Numeral::Five => "Five",
            Numeral::Six => "Six",
            Numeral::Seven => "Seven",
            Numeral::Eight => "Eight",
            Numeral::Nine => "Nine",
            Numeral::Ten => "Ten",
            Numeral::Eleven => "Eleven",
            Numeral::Twelve => "Twelve",
        }
    }
}

/// Kind tag of a lexed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Comment,
    StringLiteral,
    Variable,
    NaturalLiteral,
    NumberLiteral,
    LineEnd,
    WhiteSpace,
    Comma,
    Colon,
    Keyword(Keyword),
    Numeral(Numeral),
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Variable => "Variable",
            TokenKind::NaturalLiteral => "NaturalLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::LineEnd => "LineEnd",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::Comma => "Comma",
            TokenKind::Colon => "Colon",
            TokenKind::Keyword(keyword) => keyword.name(),
            TokenKind::Numeral(numeral) => numeral.name(),
        }
    }

    /// Skipped kinds are matched by the lexer but never reach the parser
    pub fn is_skipped(self) -> bool {
        matches!(self, TokenKind::WhiteSpace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A lexed token: kind, matched text and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub image: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, image: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            image: image.into(),
            range,
        }
    }

    pub fn line(&self) -> usize {
        self.range.start.line
    }

    pub fn column(&self) -> usize {
        self.range.start.column
    }

    pub fn offset(&self) -> usize {
        self.range.span.start
    }

    /// Length in bytes
    pub fn length(&self) -> usize {
        self.range.span.len()
    }

    pub fn position(&self) -> TokenPosition {
        TokenPosition::from(self)
    }
}

/// Flat position record used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenPosition {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub length: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl TokenPosition {
    /// Zero-length position, used when a diagnostic points at the end of input
    pub fn at(offset: usize, position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
            offset,
            length: 0,
            end_line: position.line,
            end_column: position.column,
        }
    }
}

impl From<&Token> for TokenPosition {
    fn from(token: &Token) -> Self {
        Self {
            line: token.range.start.line,
            column: token.range.start.column,
            offset: token.range.span.start,
            length: token.range.span.len(),
            end_line: token.range.end.line,
            end_column: token.range.end.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral_values_are_consecutive() {
        for (index, numeral) in Numeral::ALL.iter().enumerate() {
            assert_eq!(usize::from(numeral.value()), index);
            assert_eq!(Numeral::from_value(numeral.value()), Some(*numeral));
        }
        assert_eq!(Numeral::from_value(13), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Keyword(Keyword::ConsistsOf).name(), "ConsistsOf");
        assert_eq!(TokenKind::Numeral(Numeral::Twelve).to_string(), "Twelve");
        assert_eq!(TokenKind::LineEnd.to_string(), "LineEnd");
    }

    #[test]
    fn test_skipped_kinds() {
        assert!(TokenKind::WhiteSpace.is_skipped());
        assert!(TokenKind::Comment.is_skipped());
        assert!(!TokenKind::LineEnd.is_skipped());
    }

    #[test]
    fn test_token_position_fields() {
        let range = Range::new(6..11, Position::new(2, 3), Position::new(2, 8));
        let token = Token::new(TokenKind::NaturalLiteral, "Login", range);
        let position = token.position();
        assert_eq!((position.line, position.column), (2, 3));
        assert_eq!((position.offset, position.length), (6, 5));
        assert_eq!((position.end_line, position.end_column), (2, 8));
    }
}
