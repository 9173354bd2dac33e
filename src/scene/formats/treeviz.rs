//! Treeviz formatter
//!
//! One line per CST node, nesting drawn with box characters, so a scene's structure can be
//! checked at a glance:
//!
//!     ⧉ 1 page
//!     └─ ▭ Login
//!       └─ ▤ 1 block
//!         └─ □ Form
//!           └─ ≡ 2 entries
//!             ├─ • field Login
//!             └─ • button Submit
//!
//! Labels are truncated to 30 characters. Keywords, values and line ends are not shown, they
//! are summarized in the label of the node that owns them.
//!
//! Icons
//!     Scene: ⧉
//!     Page: ▭
//!     Blocks: ▤
//!     BlockAlign: ⇶
//!     Block: □
//!     Elements: ≡
//!     Direction: ↔
//!     Item: •
//!     List: ☰

use super::registry::{FormatOptions, Formatter};
use crate::scene::cst::elements::Scene;
use crate::scene::cst::snapshot::{snapshot_scene, CstSnapshot};
use crate::scene::error::SceneError;
use crate::scene::pipeline::ParseResult;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated: String = s.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(node_type: &str) -> &'static str {
    match node_type {
        "Scene" => "⧉",
        "Page" => "▭",
        "Blocks" => "▤",
        "BlockAlign" => "⇶",
        "Block" => "□",
        "Elements" => "≡",
        "Direction" => "↔",
        "Item" => "•",
        "List" => "☰",
        _ => "○",
    }
}

fn format_snapshot(
    output: &mut String,
    snapshot: &CstSnapshot,
    prefix: &str,
    is_last: bool,
    show_line_numbers: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };
    if show_line_numbers {
        output.push_str(&format!("{:02} ", snapshot.range.start.line));
    }
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(&snapshot.node_type),
        truncate(&snapshot.label, MAX_LABEL_CHARS)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(output, snapshot, &child_prefix, show_line_numbers);
}

fn format_children(
    output: &mut String,
    snapshot: &CstSnapshot,
    prefix: &str,
    show_line_numbers: bool,
) {
    let count = snapshot.children.len();
    for (index, child) in snapshot.children.iter().enumerate() {
        format_snapshot(output, child, prefix, index + 1 == count, show_line_numbers);
    }
}

pub fn to_treeviz_str(scene: &Scene, show_line_numbers: bool) -> String {
    let snapshot = snapshot_scene(scene);
    let mut output = format!(
        "{} {}\n",
        icon(&snapshot.node_type),
        truncate(&snapshot.label, MAX_LABEL_CHARS)
    );
    format_children(&mut output, &snapshot, "", show_line_numbers);
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(
        &self,
        result: &ParseResult,
        options: &FormatOptions,
    ) -> Result<String, SceneError> {
        let scene = result
            .scene()
            .ok_or_else(|| SceneError::NothingToShow(self.name().to_string()))?;
        Ok(to_treeviz_str(scene, options.show_line_numbers))
    }

    fn description(&self) -> &str {
        "One line per syntax tree node, with icons"
    }
}
