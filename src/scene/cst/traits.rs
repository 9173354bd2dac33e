//! CST traits - uniform access to nodes of every rule

use super::elements::{
    Block, BlockAlign, Blocks, Comment, Direction, Elements, Item, List, Literal, Number, Page,
    Scene, Value,
};
use super::range::Range;
use super::Rule;
use crate::scene::lexing::tokens::Token;

/// Visitor for walking the CST
///
/// Every method has an empty default, override the ones you care about. `visit_*` is called
/// before a node's children, `leave_*` after them.
pub trait Visitor {
    fn visit_scene(&mut self, _scene: &Scene) {}
    fn leave_scene(&mut self, _scene: &Scene) {}

    fn visit_page(&mut self, _page: &Page) {}
    fn leave_page(&mut self, _page: &Page) {}

    fn visit_blocks(&mut self, _blocks: &Blocks) {}
    fn leave_blocks(&mut self, _blocks: &Blocks) {}

    fn visit_block_align(&mut self, _align: &BlockAlign) {}

    fn visit_block(&mut self, _block: &Block) {}
    fn leave_block(&mut self, _block: &Block) {}

    fn visit_elements(&mut self, _elements: &Elements) {}
    fn leave_elements(&mut self, _elements: &Elements) {}

    fn visit_direction(&mut self, _direction: &Direction) {}

    fn visit_list(&mut self, _list: &List) {}
    fn leave_list(&mut self, _list: &List) {}

    fn visit_item(&mut self, _item: &Item) {}

    fn visit_value(&mut self, _value: &Value) {}
    fn visit_literal(&mut self, _literal: &Literal) {}
    fn visit_number(&mut self, _number: &Number) {}

    fn visit_comment(&mut self, _comment: &Comment) {}
}

/// Common interface for all CST nodes
pub trait CstNode {
    fn rule(&self) -> Rule;

    /// Push the tokens of this node and its descendants onto `out`.
    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>);

    fn accept(&self, visitor: &mut dyn Visitor);

    /// Tokens of this node and its descendants, in source order
    fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens.sort_by_key(|token| token.offset());
        tokens
    }

    /// Smallest range covering all of the node's tokens. Empty at the start of the source for a
    /// node without tokens.
    fn range(&self) -> Range {
        Range::bounding_box(self.tokens().into_iter().map(|token| &token.range)).unwrap_or_default()
    }
}

/// Where the text of a text node comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource<'a> {
    Natural(&'a Token),
    String(&'a Token),
    Variable(&'a Token),
}

impl<'a> TextSource<'a> {
    pub fn token(self) -> &'a Token {
        match self {
            TextSource::Natural(token) | TextSource::String(token) | TextSource::Variable(token) => {
                token
            }
        }
    }
}

/// Nodes that carry user text: values and literals
pub trait TextNode {
    fn source(&self) -> TextSource<'_>;

    fn token(&self) -> &Token {
        self.source().token()
    }
}
