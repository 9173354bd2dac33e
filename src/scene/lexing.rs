//! Lexer
//!
//!     Scene text is tokenized with a vocabulary generated per locale. The common tokens
//!     (literals, punctuation, line ends) are the same for every language, while keyword and
//!     numeral tokens are built from the locale's dictionary. See [token_set].
//!
//! Matching Rules
//!
//!     At each position every definition is tried. The longest match wins and ties go to the
//!     definition registered first. NaturalLiteral, the free text of captions and titles, is a
//!     catch-all: it only applies when nothing else matched, so "Button Login" lexes as a
//!     Button keyword followed by free text and not as one long literal.
//!
//!     Keywords ending in a letter must not be followed by another letter, so "Listing" is
//!     free text and not the List keyword followed by "ing".
//!
//! Trivia
//!
//!     Horizontal whitespace is dropped. Comments are not passed to the parser either, but
//!     they are kept in [LexOutput::comments] for tools that need them.
//!
//!     Line ends are significant: the grammar is line oriented and every blank line produces
//!     its own LineEnd token.

pub mod lexer;
pub mod token_set;
pub mod tokens;

pub use lexer::{LexOutput, SceneLexer};
pub use token_set::{build_tokens_for_locale, TokenDefinition, TokenSet};
pub use tokens::{Keyword, Numeral, Token, TokenKind, TokenPosition};
