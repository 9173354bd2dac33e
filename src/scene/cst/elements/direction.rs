//! Direction and number
//!
//! A direction line sets how the following items (or, in a blockalign, the named blocks) are
//! tiled: `Three columns`, `2 rows`, `Две строки`. The count is optional.

use super::super::traits::{CstNode, Visitor};
use super::super::Rule;
use crate::scene::lexing::tokens::Token;
use serde::Serialize;

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The orthogonal axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// A count from zero to twelve, written with digits or as a number word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Number {
    pub token: Token,
    pub value: u8,
}

impl CstNode for Number {
    fn rule(&self) -> Rule {
        Rule::Number
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.token);
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_number(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub count: Option<Number>,
    /// The Rows or Columns keyword
    pub axis_keyword: Token,
    pub axis: Axis,
    pub line_end: Token,
}

impl CstNode for Direction {
    fn rule(&self) -> Rule {
        Rule::Direction
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(count) = &self.count {
            count.collect_tokens(out);
        }
        out.push(&self.axis_keyword);
        out.push(&self.line_end);
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_direction(self);
        if let Some(count) = &self.count {
            count.accept(visitor);
        }
    }
}
