//! Parser
//!
//!     A recursive descent parser over the token stream, one function per grammar rule, with
//!     a single token of lookahead and no backtracking:
//!
//!         scene      := (page | LineEnd)*
//!         page       := (Mobile | Tablet | Widescreen)? Page value LineEnd blocks*
//!         blocks     := blockalign (block | LineEnd)* | (block | LineEnd)+
//!         blockalign := Blocks (literal (Comma literal)*)? Aligned direction
//!         block      := Block value? LineEnd elements*
//!         elements   := direction (item | list | LineEnd)* | (item | list | LineEnd)+
//!         direction  := number? (Rows | Columns) LineEnd
//!         item       := ((Field | Button | Header | Image | Space) value? | literal) LineEnd
//!         list       := List value? LineEnd? ConsistsOf LineEnd item*
//!         literal    := StringLiteral | Variable
//!         number     := NumberLiteral | Zero | One | ... | Twelve
//!         value      := StringLiteral | Variable | NaturalLiteral
//!
//!     A blockalign or a direction always opens a new group, so a `blocks` or `elements` group
//!     never matches the empty input.
//!
//! Error Recovery
//!
//!     The language is line oriented, and so is recovery. On an unexpected token the parser
//!     records a [ParseError](crate::scene::error::ParseError) and skips to the end of the
//!     line. Parsing then goes on in the rule that was active: a bad line inside a block does
//!     not close the block, and a page whose header is broken still has its body parsed so
//!     that the errors in it are reported.
//!
//!     Each loop stops at the tokens that can only start something at an outer level (a page
//!     keyword ends a page, a block keyword ends a block), which is how the parser climbs back
//!     out after recovering.
//!
//! State
//!
//!     [SceneGrammar] holds no parse state. Every call builds a fresh cursor, so one grammar
//!     can serve any number of parses, concurrent ones included.

pub mod parser;

pub use parser::{ParseOutput, SceneGrammar};
