//! Scene root and comments

use super::super::traits::{CstNode, Visitor};
use super::super::Rule;
use super::page::Page;
use crate::scene::lexing::tokens::Token;
use serde::Serialize;

/// A `//` comment. Comments never reach the parser, the lexer hands them over as trivia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub token: Token,
}

impl Comment {
    /// Comment text without the leading slashes
    pub fn text(&self) -> &str {
        self.token.image.trim_start_matches('/').trim()
    }
}

impl CstNode for Comment {
    fn rule(&self) -> Rule {
        Rule::Comment
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        out.push(&self.token);
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_comment(self);
    }
}

/// Root of the tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub pages: Vec<Page>,
    /// Blank lines outside of pages
    pub line_ends: Vec<Token>,
    pub comments: Vec<Comment>,
}

impl Scene {
    pub fn page_titles(&self) -> Vec<String> {
        self.pages.iter().map(Page::title).collect()
    }
}

impl CstNode for Scene {
    fn rule(&self) -> Rule {
        Rule::Scene
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        for page in &self.pages {
            page.collect_tokens(out);
        }
        out.extend(self.line_ends.iter());
        for comment in &self.comments {
            comment.collect_tokens(out);
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_scene(self);
        for page in &self.pages {
            page.accept(visitor);
        }
        for comment in &self.comments {
            comment.accept(visitor);
        }
        visitor.leave_scene(self);
    }
}
