//! Values and literals
//!
//! A value is what follows a keyword on its line: free text (`Page: Login`), a quoted string
//! (`Button "Sign in"`, `Кнопка «Войти»`) or a variable placeholder (`Header <user name>`). A
//! literal is the quoted subset, used where free text would be ambiguous: as a bare item and
//! as a block name in a blockalign.

use super::super::traits::{CstNode, TextNode, TextSource, Visitor};
use super::super::Rule;
use crate::scene::lexing::tokens::Token;
use crate::scene::views::token_image;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    Natural(Token),
    String(Token),
    Variable(Token),
}

impl Value {
    /// Text of the value with delimiters stripped and escapes resolved
    pub fn text(&self) -> String {
        token_image(self)
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(_))
    }
}

impl TextNode for Value {
    fn source(&self) -> TextSource<'_> {
        match self {
            Value::Natural(token) => TextSource::Natural(token),
            Value::String(token) => TextSource::String(token),
            Value::Variable(token) => TextSource::Variable(token),
        }
    }
}

impl CstNode for Value {
    fn rule(&self) -> Rule {
        Rule::Value
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(TextNode::token(self));
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_value(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Literal {
    String(Token),
    Variable(Token),
}

impl Literal {
    pub fn text(&self) -> String {
        token_image(self)
    }
}

impl TextNode for Literal {
    fn source(&self) -> TextSource<'_> {
        match self {
            Literal::String(token) => TextSource::String(token),
            Literal::Variable(token) => TextSource::Variable(token),
        }
    }
}

impl CstNode for Literal {
    fn rule(&self) -> Rule {
        Rule::Literal
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(TextNode::token(self));
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_literal(self);
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::String(token) => Value::String(token),
            Literal::Variable(token) => Value::Variable(token),
        }
    }
}
