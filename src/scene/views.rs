//! Derived views over the CST
//!
//! The CST keeps the scene as written. Layout code needs it resolved: the text behind a value,
//! the effective direction of a group, which blocks a blockalign pulls together. These helpers
//! compute that on demand, nothing here is stored in the tree.

use crate::scene::cst::elements::{
    Axis, Block, Blocks, Device, Direction, Item, ItemContent, Page, Scene, Value,
};
use crate::scene::cst::traits::{TextNode, TextSource};
use crate::scene::nlp::CaseNormalizer;
use serde::Serialize;
use std::collections::HashSet;

/// Effective layout of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectionDescription {
    /// Items per line along the axis, at least 1
    pub count: u8,
    pub axis: Axis,
    pub cross_axis: Axis,
}

impl Default for DirectionDescription {
    /// A group without a direction is a single column
    fn default() -> Self {
        Self {
            count: 1,
            axis: Axis::Column,
            cross_axis: Axis::Row,
        }
    }
}

/// A set of blocks laid out together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignRule<'a> {
    pub blocks: Vec<&'a Block>,
    pub direction: DirectionDescription,
}

pub fn flatten_direction(direction: Option<&Direction>) -> DirectionDescription {
    match direction {
        None => DirectionDescription::default(),
        Some(direction) => DirectionDescription {
            count: direction.count.as_ref().map_or(1, |count| count.value.max(1)),
            axis: direction.axis,
            cross_axis: direction.axis.cross(),
        },
    }
}

/// The group's own blocks with its blockalign direction. Name references are not resolved,
/// see [page_block_groups] for that.
pub fn blocks_to_rule(blocks: &Blocks) -> AlignRule<'_> {
    AlignRule {
        blocks: blocks.blocks.iter().collect(),
        direction: flatten_direction(blocks.align.as_ref().map(|align| &align.direction)),
    }
}

/// Block groups of a page with blockalign references resolved.
///
/// A name refers to the first block on the page with that title. The referenced block moves
/// into the group of the blockalign naming it, in the order the names are listed. A name
/// matching no block is ignored. A block claimed twice stays with the first claim. Groups left
/// without blocks are dropped.
pub fn page_block_groups(page: &Page) -> Vec<AlignRule<'_>> {
    let blocks: Vec<&Block> = page.all_blocks().collect();
    let mut claimed: HashSet<usize> = HashSet::new();

    let references: Vec<Vec<usize>> = page
        .blocks
        .iter()
        .map(|group| {
            let mut resolved = Vec::new();
            for name in group.align.iter().flat_map(|align| align.names()) {
                let target = blocks
                    .iter()
                    .position(|block| block.title().as_deref() == Some(name.as_str()));
                if let Some(index) = target {
                    if claimed.insert(index) {
                        resolved.push(index);
                    }
                }
            }
            resolved
        })
        .collect();

    let mut rules = Vec::new();
    let mut first_own = 0;
    for (group, resolved) in page.blocks.iter().zip(references) {
        let own = first_own..first_own + group.blocks.len();
        first_own = own.end;
        let members: Vec<&Block> = resolved
            .into_iter()
            .chain(own.filter(|index| !claimed.contains(index)))
            .map(|index| blocks[index])
            .collect();
        if members.is_empty() {
            continue;
        }
        rules.push(AlignRule {
            blocks: members,
            direction: flatten_direction(group.align.as_ref().map(|align| &align.direction)),
        });
    }
    rules
}

/// Text of a value or literal.
///
/// Free text is trimmed, strings lose their quotes and have `\"`, `\«`, `\»` and `\\`
/// unescaped, variables lose their angle brackets.
pub fn token_image(node: &dyn TextNode) -> String {
    match node.source() {
        TextSource::Natural(token) => token.image.trim().to_string(),
        TextSource::String(token) => unescape(strip_delimiters(&token.image)),
        TextSource::Variable(token) => strip_delimiters(&token.image).to_string(),
    }
}

fn strip_delimiters(image: &str) -> &str {
    let mut chars = image.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn unescape(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '"' | '«' | '»' | '\\') {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(ch);
    }
    unescaped
}

/// Wireframe width of a page in pixels, by device
pub fn page_width(page: &Page) -> Option<u32> {
    page.device().map(|device| match device {
        Device::Mobile => 320,
        Device::Tablet => 640,
        Device::Widescreen => 960,
    })
}

/// Width of the widest page
pub fn scene_width(scene: &Scene) -> Option<u32> {
    scene.pages.iter().filter_map(page_width).max()
}

/// Text the renderer shows on an item.
///
/// Free text goes through `normalizer` when one is given; quoted strings are shown as written.
/// An item without text shows its keyword, so a bare `Button` reads "Button".
pub fn item_caption(item: &Item, normalizer: Option<&dyn CaseNormalizer>) -> String {
    match &item.content {
        ItemContent::Literal(literal) => literal.text(),
        ItemContent::Widget {
            value: Some(value), ..
        } => match (value, normalizer) {
            (Value::Natural(_), Some(normalizer)) => normalizer.to_nominative_case(&value.text()),
            _ => value.text(),
        },
        ItemContent::Widget { keyword, .. } => keyword
            .image
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::cst::range::Range;
    use crate::scene::lexing::tokens::{Token, TokenKind};

    fn token(kind: TokenKind, image: &str) -> Token {
        Token::new(kind, image, Range::default())
    }

    #[test]
    fn test_flatten_missing_direction() {
        assert_eq!(
            flatten_direction(None),
            DirectionDescription {
                count: 1,
                axis: Axis::Column,
                cross_axis: Axis::Row
            }
        );
    }

    #[test]
    fn test_token_image_strips_and_unescapes() {
        let natural = Value::Natural(token(TokenKind::NaturalLiteral, " Sign in  "));
        assert_eq!(token_image(&natural), "Sign in");

        let string = Value::String(token(TokenKind::StringLiteral, r#""Say \"hi\" \\ bye""#));
        assert_eq!(token_image(&string), r#"Say "hi" \ bye"#);

        let guillemets = Value::String(token(TokenKind::StringLiteral, r"«Магазин \«Ромашка\»»"));
        assert_eq!(token_image(&guillemets), "Магазин «Ромашка»");

        let variable = Value::Variable(token(TokenKind::Variable, "<user name>"));
        assert_eq!(token_image(&variable), "user name");
    }

    #[test]
    fn test_unknown_escapes_are_kept() {
        let string = Value::String(token(TokenKind::StringLiteral, r#""a\nb""#));
        assert_eq!(token_image(&string), r"a\nb");
    }
}
