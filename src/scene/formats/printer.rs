//! Scene printer
//!
//! Prints a CST back as scene text in a normalized layout: pages, blockaligns and blocks at
//! the left margin, block content indented by four spaces, list items one level below their
//! list. Keywords and values are printed as they were written, so the output stays in the
//! scene's language.
//!
//! Only what the tree keeps is printed. Blank lines are dropped unless they carry structure
//! (an otherwise empty group, the end of a list followed by more items), comments are kept on
//! lines of their own.
//!
//! Parsing the printed text gives back the same tree, modulo positions.

use super::registry::{FormatOptions, Formatter};
use crate::scene::cst::elements::{
    Block, BlockAlign, Blocks, Direction, Elements, Item, ItemContent, List, Literal, Page,
    Scene, Value,
};
use crate::scene::cst::traits::{CstNode, TextNode, Visitor};
use crate::scene::error::SceneError;
use crate::scene::lexing::tokens::Token;
use crate::scene::pipeline::ParseResult;

const INDENT: &str = "    ";

pub struct ScenePrinter {
    output: String,
    indent_level: usize,
    comments: Vec<Token>,
    next_comment: usize,
    /// Set while a blockalign's own direction is visited, it is printed with the blockalign
    in_block_align: bool,
    list_depths: Vec<usize>,
    /// A list just ended. An item printed right after it needs a blank line in between, or it
    /// would be read back as one of the list's items.
    list_closed: bool,
}

impl ScenePrinter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            comments: Vec::new(),
            next_comment: 0,
            in_block_align: false,
            list_depths: Vec::new(),
            list_closed: false,
        }
    }

    pub fn print(mut self, scene: &Scene) -> String {
        self.comments = scene.comments.iter().map(|c| c.token.clone()).collect();
        self.comments.sort_by_key(Token::offset);
        scene.accept(&mut self);
        self.flush_comments(usize::MAX);
        self.output
    }

    fn write_line(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Print the comments found before `line`.
    fn flush_comments(&mut self, line: usize) {
        while let Some(comment) = self.comments.get(self.next_comment) {
            if comment.line() >= line {
                break;
            }
            let text = comment.image.trim().to_string();
            self.next_comment += 1;
            self.write_line(&text);
        }
    }

    /// Prepare for a line printed for `node`.
    fn start_line(&mut self, node: &dyn CstNode) {
        self.flush_comments(node.range().start.line);
    }
}

impl Default for ScenePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// A keyword as written, with runs of whitespace collapsed
fn keyword(token: &Token) -> String {
    token.image.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn raw_text(node: &dyn TextNode) -> String {
    node.token().image.trim().to_string()
}

fn join_line(parts: impl IntoIterator<Item = String>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn direction_text(direction: &Direction) -> String {
    let count = direction.count.as_ref().map(|count| count.token.image.trim().to_string());
    join_line(count.into_iter().chain([keyword(&direction.axis_keyword)]))
}

impl Visitor for ScenePrinter {
    fn visit_page(&mut self, page: &Page) {
        self.start_line(page);
        self.list_closed = false;
        let device = page.device.as_ref().map(|tag| keyword(&tag.token));
        let line = join_line(
            device
                .into_iter()
                .chain([keyword(&page.keyword), raw_text(&page.value)]),
        );
        self.write_line(&line);
    }

    fn visit_blocks(&mut self, blocks: &Blocks) {
        self.list_closed = false;
        if blocks.align.is_none() && blocks.blocks.is_empty() {
            self.blank_line();
        }
    }

    fn visit_block_align(&mut self, align: &BlockAlign) {
        self.start_line(align);
        let names = align.names.iter().map(|name: &Literal| raw_text(name));
        let line = join_line([
            keyword(&align.keyword),
            names.collect::<Vec<_>>().join(", "),
            keyword(&align.aligned),
            direction_text(&align.direction),
        ]);
        self.write_line(&line);
        self.in_block_align = true;
    }

    fn visit_block(&mut self, block: &Block) {
        self.start_line(block);
        self.list_closed = false;
        let title = block.title.as_ref().map(|title: &Value| raw_text(title));
        let line = join_line([keyword(&block.keyword)].into_iter().chain(title));
        self.write_line(&line);
        self.indent_level += 1;
    }

    fn leave_block(&mut self, _block: &Block) {
        self.indent_level -= 1;
    }

    fn visit_elements(&mut self, elements: &Elements) {
        self.list_closed = false;
        if elements.direction.is_none() && elements.entries.is_empty() {
            self.blank_line();
        }
    }

    fn visit_direction(&mut self, direction: &Direction) {
        if self.in_block_align {
            self.in_block_align = false;
            return;
        }
        self.start_line(direction);
        self.write_line(&direction_text(direction));
    }

    fn visit_list(&mut self, list: &List) {
        self.start_line(list);
        self.list_closed = false;
        let title = list.title.as_ref().map(|title: &Value| raw_text(title));
        let header = [keyword(&list.keyword)].into_iter().chain(title);
        if list.header_end.is_some() {
            self.write_line(&join_line(header));
            self.indent_level += 1;
            self.write_line(&keyword(&list.consists_of));
            self.indent_level += 1;
            self.list_depths.push(2);
        } else {
            self.write_line(&join_line(header.chain([keyword(&list.consists_of)])));
            self.indent_level += 1;
            self.list_depths.push(1);
        }
    }

    fn leave_list(&mut self, _list: &List) {
        self.indent_level -= self.list_depths.pop().unwrap_or(0);
        self.list_closed = true;
    }

    fn visit_item(&mut self, item: &Item) {
        self.start_line(item);
        if self.list_closed {
            self.blank_line();
            self.list_closed = false;
        }
        let line = match &item.content {
            ItemContent::Widget { keyword: kw, value, .. } => join_line(
                [keyword(kw)]
                    .into_iter()
                    .chain(value.as_ref().map(|value: &Value| raw_text(value))),
            ),
            ItemContent::Literal(literal) => raw_text(literal),
        };
        self.write_line(&line);
    }
}

/// Print a scene back as text.
pub fn print_scene(scene: &Scene) -> String {
    ScenePrinter::new().print(scene)
}

pub struct SceneFormatter;

impl Formatter for SceneFormatter {
    fn name(&self) -> &str {
        "scene"
    }

    fn serialize(
        &self,
        result: &ParseResult,
        _options: &FormatOptions,
    ) -> Result<String, SceneError> {
        let scene = result
            .scene()
            .ok_or_else(|| SceneError::NothingToShow(self.name().to_string()))?;
        Ok(print_scene(scene))
    }

    fn description(&self) -> &str {
        "The syntax tree printed back as scene text"
    }
}
