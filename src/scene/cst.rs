//! Concrete syntax tree
//!
//!     The parser's output mirrors the grammar rule by rule: every rule has its own node type,
//!     and every node owns exactly the children its production allows. A single child is a
//!     field, an optional child is an `Option` and a repetition is a `Vec`, so the shape of a
//!     node never has to be inspected at runtime.
//!
//!     Nodes keep the tokens they were built from, keywords and line ends included. Nothing
//!     is resolved at this stage: block references are still names and captions are still
//!     raw token images. See [views](crate::scene::views) for the derived, resolved views.
//!
//! Rules
//!
//!     scene       pages, plus the blank lines and comments between them
//!     page        one screen, optionally tagged with a device
//!     blocks      a group of blocks, optionally led by a blockalign
//!     blockalign  regroups named blocks into rows or columns
//!     block       a named visual group of elements
//!     elements    a run of items and lists, optionally led by a direction
//!     direction   rows or columns with an optional count
//!     item        a widget or a bare literal
//!     list        a repeated item template
//!     value       free text, a string or a variable
//!     literal     a string or a variable
//!     number      a count from zero to twelve
//!     comment     `//` to the end of the line

pub mod elements;
pub mod range;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Axis, Block, BlockAlign, Blocks, Comment, Device, DeviceTag, Direction, Element, Elements,
    Item, ItemContent, ItemKind, List, Literal, Number, Page, Scene, Value,
};
pub use range::{Position, Range};
pub use snapshot::{snapshot_scene, CstSnapshot};
pub use traits::{CstNode, TextNode, TextSource, Visitor};

use serde::Serialize;
use std::fmt;

/// Grammar rule names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    Scene,
    Page,
    Blocks,
    BlockAlign,
    Block,
    Elements,
    Direction,
    Item,
    List,
    Value,
    Literal,
    Number,
    Comment,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Scene => "scene",
            Rule::Page => "page",
            Rule::Blocks => "blocks",
            Rule::BlockAlign => "blockalign",
            Rule::Block => "block",
            Rule::Elements => "elements",
            Rule::Direction => "direction",
            Rule::Item => "item",
            Rule::List => "list",
            Rule::Value => "value",
            Rule::Literal => "literal",
            Rule::Number => "number",
            Rule::Comment => "comment",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
