//! CST Snapshot - a normalized, format-agnostic view of the tree
//!
//! Formatters that print the tree (treeviz, and anything line oriented that comes after it)
//! consume a snapshot rather than walking the CST themselves. Keywords and line ends are
//! left out: a snapshot node carries its rule, a display label, a few attributes and its
//! children.

use super::elements::{
    Block, BlockAlign, Blocks, Direction, Element, Elements, Item, List, Page, Scene,
};
use super::range::Range;
use super::traits::CstNode;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CstSnapshot {
    /// Node type, e.g. "Page", "Block", "Item"
    pub node_type: String,
    pub label: String,
    pub attributes: BTreeMap<String, String>,
    pub range: Range,
    pub children: Vec<CstSnapshot>,
}

impl CstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>, range: Range) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            range,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: CstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = CstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

pub fn snapshot_scene(scene: &Scene) -> CstSnapshot {
    let label = plural(scene.pages.len(), "page", "pages");
    CstSnapshot::new("Scene", label, scene.range())
        .with_children(scene.pages.iter().map(snapshot_page))
}

pub fn snapshot_page(page: &Page) -> CstSnapshot {
    let mut snapshot = CstSnapshot::new("Page", page.title(), page.range());
    if let Some(device) = page.device() {
        snapshot = snapshot.with_attribute("device", device.name());
    }
    snapshot.with_children(page.blocks.iter().map(snapshot_blocks))
}

fn snapshot_blocks(blocks: &Blocks) -> CstSnapshot {
    let label = plural(blocks.blocks.len(), "block", "blocks");
    CstSnapshot::new("Blocks", label, blocks.range())
        .with_children(blocks.align.iter().map(snapshot_block_align))
        .with_children(blocks.blocks.iter().map(snapshot_block))
}

fn snapshot_block_align(align: &BlockAlign) -> CstSnapshot {
    let names: Vec<String> = align.names().collect();
    let label = if names.is_empty() {
        "following blocks".to_string()
    } else {
        names.join(", ")
    };
    CstSnapshot::new("BlockAlign", label, align.range())
        .with_child(snapshot_direction(&align.direction))
}

fn snapshot_block(block: &Block) -> CstSnapshot {
    let label = block.title().unwrap_or_else(|| "(untitled)".to_string());
    CstSnapshot::new("Block", label, block.range())
        .with_children(block.elements.iter().map(snapshot_elements))
}

fn snapshot_elements(elements: &Elements) -> CstSnapshot {
    let label = plural(elements.entries.len(), "entry", "entries");
    CstSnapshot::new("Elements", label, elements.range())
        .with_children(elements.direction.iter().map(snapshot_direction))
        .with_children(elements.entries.iter().map(snapshot_element))
}

fn snapshot_direction(direction: &Direction) -> CstSnapshot {
    let axis = direction.axis.name();
    let label = match &direction.count {
        Some(count) => plural(count.value.into(), axis, &format!("{axis}s")),
        None => format!("{axis}s"),
    };
    CstSnapshot::new("Direction", label, direction.range()).with_attribute("axis", axis)
}

fn snapshot_element(element: &Element) -> CstSnapshot {
    match element {
        Element::Item(item) => snapshot_item(item),
        Element::List(list) => snapshot_list(list),
    }
}

fn snapshot_item(item: &Item) -> CstSnapshot {
    let kind = item.kind_name();
    let label = match item.text() {
        Some(text) => format!("{kind} {text}"),
        None => kind.to_string(),
    };
    CstSnapshot::new("Item", label, item.range()).with_attribute("kind", kind)
}

fn snapshot_list(list: &List) -> CstSnapshot {
    let label = list.title().unwrap_or_else(|| "(untitled)".to_string());
    CstSnapshot::new("List", label, list.range())
        .with_children(list.items.iter().map(snapshot_item))
}
