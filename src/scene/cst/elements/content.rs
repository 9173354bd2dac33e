//! Items, lists and element groups
//!
//! An item is one widget per line. Its kind is decided by the leading keyword; a line holding
//! only a quoted string or a variable is a bare literal item (plain text).
//!
//! A list is a template of repeated items:
//!
//!     List Contacts
//!     consists of
//!         Image <avatar>
//!         Header <name>
//!
//! The list's items run until the first line that is not an item, usually a blank line.

use super::super::traits::{CstNode, Visitor};
use super::super::Rule;
use super::direction::Direction;
use super::value::{Literal, Value};
use crate::scene::lexing::tokens::{Keyword, Token};
use serde::Serialize;

/// Widget kinds introduced by a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Field,
    Button,
    Header,
    Image,
    Space,
}

impl ItemKind {
    pub fn from_keyword(keyword: Keyword) -> Option<ItemKind> {
        match keyword {
            Keyword::Field => Some(ItemKind::Field),
            Keyword::Button => Some(ItemKind::Button),
            Keyword::Header => Some(ItemKind::Header),
            Keyword::Image => Some(ItemKind::Image),
            Keyword::Space => Some(ItemKind::Space),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            ItemKind::Field => Keyword::Field,
            ItemKind::Button => Keyword::Button,
            ItemKind::Header => Keyword::Header,
            ItemKind::Image => Keyword::Image,
            ItemKind::Space => Keyword::Space,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Field => "field",
            ItemKind::Button => "button",
            ItemKind::Header => "header",
            ItemKind::Image => "image",
            ItemKind::Space => "space",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ItemContent {
    Widget {
        kind: ItemKind,
        keyword: Token,
        value: Option<Value>,
    },
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub content: ItemContent,
    pub line_end: Token,
}

impl Item {
    /// Widget kind, `None` for a bare literal
    pub fn kind(&self) -> Option<ItemKind> {
        match &self.content {
            ItemContent::Widget { kind, .. } => Some(*kind),
            ItemContent::Literal(_) => None,
        }
    }

    /// Name of the item kind, `literal` for a bare literal
    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("literal", ItemKind::name)
    }

    /// Text written on the item's line, if any
    pub fn text(&self) -> Option<String> {
        match &self.content {
            ItemContent::Widget { value, .. } => value.as_ref().map(Value::text),
            ItemContent::Literal(literal) => Some(literal.text()),
        }
    }
}

impl CstNode for Item {
    fn rule(&self) -> Rule {
        Rule::Item
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match &self.content {
            ItemContent::Widget { keyword, value, .. } => {
                out.push(keyword);
                if let Some(value) = value {
                    value.collect_tokens(out);
                }
            }
            ItemContent::Literal(literal) => literal.collect_tokens(out),
        }
        out.push(&self.line_end);
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_item(self);
        match &self.content {
            ItemContent::Widget {
                value: Some(value), ..
            } => value.accept(visitor),
            ItemContent::Widget { value: None, .. } => {}
            ItemContent::Literal(literal) => literal.accept(visitor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub keyword: Token,
    pub title: Option<Value>,
    /// Line end between the title line and `consists of`, when they are on separate lines
    pub header_end: Option<Token>,
    pub consists_of: Token,
    pub line_end: Token,
    pub items: Vec<Item>,
}

impl List {
    pub fn title(&self) -> Option<String> {
        self.title.as_ref().map(Value::text)
    }
}

impl CstNode for List {
    fn rule(&self) -> Rule {
        Rule::List
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.keyword);
        if let Some(title) = &self.title {
            title.collect_tokens(out);
        }
        out.extend(self.header_end.iter());
        out.push(&self.consists_of);
        out.push(&self.line_end);
        for item in &self.items {
            item.collect_tokens(out);
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list(self);
        if let Some(title) = &self.title {
            title.accept(visitor);
        }
        for item in &self.items {
            item.accept(visitor);
        }
        visitor.leave_list(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Element {
    Item(Item),
    List(List),
}

impl Element {
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Element::Item(item) => Some(item),
            Element::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Element::List(list) => Some(list),
            Element::Item(_) => None,
        }
    }

    fn node(&self) -> &dyn CstNode {
        match self {
            Element::Item(item) => item,
            Element::List(list) => list,
        }
    }
}

impl CstNode for Element {
    fn rule(&self) -> Rule {
        self.node().rule()
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            Element::Item(item) => item.collect_tokens(out),
            Element::List(list) => list.collect_tokens(out),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        self.node().accept(visitor);
    }
}

/// A run of items and lists sharing one direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Elements {
    pub direction: Option<Direction>,
    pub entries: Vec<Element>,
    /// Blank lines inside the group
    pub line_ends: Vec<Token>,
}

impl Elements {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().filter_map(Element::as_item)
    }

    pub fn is_empty(&self) -> bool {
        self.direction.is_none() && self.entries.is_empty() && self.line_ends.is_empty()
    }
}

impl CstNode for Elements {
    fn rule(&self) -> Rule {
        Rule::Elements
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(direction) = &self.direction {
            direction.collect_tokens(out);
        }
        for entry in &self.entries {
            entry.collect_tokens(out);
        }
        out.extend(self.line_ends.iter());
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_elements(self);
        if let Some(direction) = &self.direction {
            direction.accept(visitor);
        }
        for entry in &self.entries {
            entry.accept(visitor);
        }
        visitor.leave_elements(self);
    }
}
