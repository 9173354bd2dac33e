//! Blocks, block groups and block alignment
//!
//! A blockalign regroups blocks declared anywhere on the page by name:
//!
//!     Blocks "Menu", "Content" aligned in two columns
//!
//! Without names it lays out the blocks that follow it in the same group.

use super::super::traits::{CstNode, Visitor};
use super::super::Rule;
use super::content::Elements;
use super::direction::Direction;
use super::value::{Literal, Value};
use crate::scene::lexing::tokens::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockAlign {
    pub keyword: Token,
    /// Titles of the blocks to regroup
    pub names: Vec<Literal>,
    pub commas: Vec<Token>,
    pub aligned: Token,
    pub direction: Direction,
}

impl BlockAlign {
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(Literal::text)
    }
}

impl CstNode for BlockAlign {
    fn rule(&self) -> Rule {
        Rule::BlockAlign
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.keyword);
        for name in &self.names {
            name.collect_tokens(out);
        }
        out.extend(self.commas.iter());
        out.push(&self.aligned);
        self.direction.collect_tokens(out);
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_block_align(self);
        for name in &self.names {
            name.accept(visitor);
        }
        self.direction.accept(visitor);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub keyword: Token,
    pub title: Option<Value>,
    pub line_end: Token,
    pub elements: Vec<Elements>,
}

impl Block {
    pub fn title(&self) -> Option<String> {
        self.title.as_ref().map(Value::text)
    }
}

impl CstNode for Block {
    fn rule(&self) -> Rule {
        Rule::Block
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.keyword);
        if let Some(title) = &self.title {
            title.collect_tokens(out);
        }
        out.push(&self.line_end);
        for elements in &self.elements {
            elements.collect_tokens(out);
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_block(self);
        if let Some(title) = &self.title {
            title.accept(visitor);
        }
        for elements in &self.elements {
            elements.accept(visitor);
        }
        visitor.leave_block(self);
    }
}

/// A group of blocks, optionally led by a blockalign
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blocks {
    pub align: Option<BlockAlign>,
    pub blocks: Vec<Block>,
    pub line_ends: Vec<Token>,
}

impl Blocks {
    pub fn is_empty(&self) -> bool {
        self.align.is_none() && self.blocks.is_empty() && self.line_ends.is_empty()
    }
}

impl CstNode for Blocks {
    fn rule(&self) -> Rule {
        Rule::Blocks
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(align) = &self.align {
            align.collect_tokens(out);
        }
        for block in &self.blocks {
            block.collect_tokens(out);
        }
        out.extend(self.line_ends.iter());
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_blocks(self);
        if let Some(align) = &self.align {
            align.accept(visitor);
        }
        for block in &self.blocks {
            block.accept(visitor);
        }
        visitor.leave_blocks(self);
    }
}
