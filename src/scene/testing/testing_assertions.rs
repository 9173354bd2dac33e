//! Fluent assertion API for scene trees

use crate::scene::cst::elements::{
    Axis, Block, Blocks, Device, Element, Elements, Item, ItemKind, List, Page, Scene,
};
use crate::scene::views::{flatten_direction, DirectionDescription};

// ============================================================================
// Entry Point
// ============================================================================

pub fn assert_scene(scene: &Scene) -> SceneAssertion<'_> {
    SceneAssertion { scene }
}

fn summarize_items<'a>(items: impl Iterator<Item = &'a Item>) -> String {
    items
        .map(|item| match item.text() {
            Some(text) => format!("{} {:?}", item.kind_name(), text),
            None => item.kind_name().to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Scene
// ============================================================================

pub struct SceneAssertion<'a> {
    scene: &'a Scene,
}

impl<'a> SceneAssertion<'a> {
    pub fn page_count(self, expected: usize) -> Self {
        let actual = self.scene.pages.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} pages, found {}: {:?}",
            expected,
            actual,
            self.scene.page_titles()
        );
        self
    }

    pub fn page<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PageAssertion<'a>),
    {
        let page = self.scene.pages.get(index).unwrap_or_else(|| {
            panic!(
                "Page index {} out of bounds (scene has {} pages)",
                index,
                self.scene.pages.len()
            )
        });
        assertion(PageAssertion {
            page,
            context: format!("pages[{index}]"),
        });
        self
    }

    pub fn comment_count(self, expected: usize) -> Self {
        let actual = self.scene.comments.len();
        assert_eq!(actual, expected, "Expected {expected} comments, found {actual}");
        self
    }
}

// ============================================================================
// Page
// ============================================================================

pub struct PageAssertion<'a> {
    page: &'a Page,
    context: String,
}

impl<'a> PageAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        let actual = self.page.title();
        assert_eq!(actual, expected, "{}: expected title {:?}, found {:?}", self.context, expected, actual);
        self
    }

    pub fn device(self, expected: Option<Device>) -> Self {
        let actual = self.page.device();
        assert_eq!(actual, expected, "{}: expected device {:?}, found {:?}", self.context, expected, actual);
        self
    }

    /// Number of blocks on the page, over all groups
    pub fn block_count(self, expected: usize) -> Self {
        let titles: Vec<Option<String>> = self.page.all_blocks().map(Block::title).collect();
        assert_eq!(
            titles.len(),
            expected,
            "{}: expected {} blocks, found {}: {:?}",
            self.context,
            expected,
            titles.len(),
            titles
        );
        self
    }

    /// Assert on a block by its index on the page, counting over all groups
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let count = self.page.all_blocks().count();
        let block = self.page.all_blocks().nth(index).unwrap_or_else(|| {
            panic!("{}: block index {} out of bounds ({} blocks)", self.context, index, count)
        });
        assertion(BlockAssertion {
            block,
            context: format!("{}.blocks[{index}]", self.context),
        });
        self
    }

    pub fn group_count(self, expected: usize) -> Self {
        let actual = self.page.blocks.len();
        assert_eq!(actual, expected, "{}: expected {} block groups, found {}", self.context, expected, actual);
        self
    }

    pub fn group<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlocksAssertion<'a>),
    {
        let group = self.page.blocks.get(index).unwrap_or_else(|| {
            panic!(
                "{}: group index {} out of bounds ({} groups)",
                self.context,
                index,
                self.page.blocks.len()
            )
        });
        assertion(BlocksAssertion {
            group,
            context: format!("{}.groups[{index}]", self.context),
        });
        self
    }
}

// ============================================================================
// Block groups
// ============================================================================

pub struct BlocksAssertion<'a> {
    group: &'a Blocks,
    context: String,
}

impl<'a> BlocksAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.group.blocks.len();
        assert_eq!(actual, expected, "{}: expected {} blocks, found {}", self.context, expected, actual);
        self
    }

    /// Names listed by the group's blockalign
    pub fn aligned_names(self, expected: &[&str]) -> Self {
        let align = self
            .group
            .align
            .as_ref()
            .unwrap_or_else(|| panic!("{}: expected a blockalign, found none", self.context));
        let actual: Vec<String> = align.names().collect();
        assert_eq!(actual, expected, "{}: blockalign names differ", self.context);
        self
    }

    pub fn direction(self, count: u8, axis: Axis) -> Self {
        let actual = flatten_direction(self.group.align.as_ref().map(|align| &align.direction));
        assert_direction(&self.context, actual, count, axis);
        self
    }
}

fn assert_direction(context: &str, actual: DirectionDescription, count: u8, axis: Axis) {
    assert_eq!(
        (actual.count, actual.axis),
        (count, axis),
        "{context}: expected {count} {axis:?}, found {} {:?}",
        actual.count,
        actual.axis
    );
}

// ============================================================================
// Block
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        let actual = self.block.title();
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: expected title {:?}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    pub fn untitled(self) -> Self {
        assert_eq!(self.block.title(), None, "{}: expected no title", self.context);
        self
    }

    fn items(&self) -> impl Iterator<Item = &'a Item> {
        self.block.elements.iter().flat_map(Elements::items)
    }

    /// Number of items in the block, over all element groups, list items excluded
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.items().count();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} items, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_items(self.items())
        );
        self
    }

    /// Assert on an item by its index in the block, counting over all element groups
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let item = self.items().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: item index {} out of bounds, items are [{}]",
                self.context,
                index,
                summarize_items(self.items())
            )
        });
        assertion(ItemAssertion {
            item,
            context: format!("{}.items[{index}]", self.context),
        });
        self
    }

    pub fn elements_count(self, expected: usize) -> Self {
        let actual = self.block.elements.len();
        assert_eq!(actual, expected, "{}: expected {} element groups, found {}", self.context, expected, actual);
        self
    }

    pub fn elements<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementsAssertion<'a>),
    {
        let elements = self.block.elements.get(index).unwrap_or_else(|| {
            panic!(
                "{}: element group index {} out of bounds ({} groups)",
                self.context,
                index,
                self.block.elements.len()
            )
        });
        assertion(ElementsAssertion {
            elements,
            context: format!("{}.elements[{index}]", self.context),
        });
        self
    }
}

// ============================================================================
// Element groups
// ============================================================================

pub struct ElementsAssertion<'a> {
    elements: &'a Elements,
    context: String,
}

impl<'a> ElementsAssertion<'a> {
    pub fn direction(self, count: u8, axis: Axis) -> Self {
        assert_direction(&self.context, flatten_direction(self.elements.direction.as_ref()), count, axis);
        self
    }

    pub fn entry_count(self, expected: usize) -> Self {
        let actual = self.elements.entries.len();
        assert_eq!(actual, expected, "{}: expected {} entries, found {}", self.context, expected, actual);
        self
    }

    fn entry(&self, index: usize) -> &'a Element {
        self.elements.entries.get(index).unwrap_or_else(|| {
            panic!(
                "{}: entry index {} out of bounds ({} entries)",
                self.context,
                index,
                self.elements.entries.len()
            )
        })
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let item = self
            .entry(index)
            .as_item()
            .unwrap_or_else(|| panic!("{}: entry {} is a list, not an item", self.context, index));
        assertion(ItemAssertion {
            item,
            context: format!("{}.entries[{index}]", self.context),
        });
        self
    }

    pub fn list<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListAssertion<'a>),
    {
        let list = self
            .entry(index)
            .as_list()
            .unwrap_or_else(|| panic!("{}: entry {} is an item, not a list", self.context, index));
        assertion(ListAssertion {
            list,
            context: format!("{}.entries[{index}]", self.context),
        });
        self
    }
}

// ============================================================================
// Items and lists
// ============================================================================

pub struct ItemAssertion<'a> {
    item: &'a Item,
    context: String,
}

impl ItemAssertion<'_> {
    pub fn kind(self, expected: ItemKind) -> Self {
        assert_eq!(
            self.item.kind(),
            Some(expected),
            "{}: expected a {} item, found {}",
            self.context,
            expected.name(),
            self.item.kind_name()
        );
        self
    }

    /// A bare string or variable on its own line
    pub fn literal(self) -> Self {
        assert_eq!(
            self.item.kind(),
            None,
            "{}: expected a literal item, found {}",
            self.context,
            self.item.kind_name()
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        let actual = self.item.text();
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: expected text {:?}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    pub fn no_text(self) -> Self {
        let actual = self.item.text();
        assert_eq!(actual, None, "{}: expected no text, found {:?}", self.context, actual);
        self
    }
}

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        let actual = self.list.title();
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "{}: expected title {:?}, found {:?}",
            self.context,
            expected,
            actual
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} list items, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize_items(self.list.items.iter())
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let item = self.list.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: list item index {} out of bounds ({} items)",
                self.context,
                index,
                self.list.items.len()
            )
        });
        assertion(ItemAssertion {
            item,
            context: format!("{}.items[{index}]", self.context),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::pipeline::parse_scene_to_ast;
    use crate::scene::testing::samples;

    #[test]
    fn test_fluent_walk() {
        let scene = parse_scene_to_ast(samples::LOGIN_EN)
            .into_scene()
            .expect("sample to parse");
        assert_scene(&scene).page_count(1).page(0, |page| {
            page.title("Login")
                .device(Some(Device::Mobile))
                .block_count(2)
                .block(0, |block| {
                    block.title("Form").item_count(5).item(4, |item| {
                        item.kind(ItemKind::Button).text("Sign in");
                    });
                })
                .block(1, |block| {
                    block.elements(0, |elements| {
                        elements.direction(2, Axis::Column).item(2, |item| {
                            item.literal().text("2020 @vadkou");
                        });
                    });
                });
        });
    }

    #[test]
    #[should_panic(expected = "pages[0].blocks[0]: expected title")]
    fn test_failure_names_the_path() {
        let scene = parse_scene_to_ast(samples::LOGIN_EN)
            .into_scene()
            .expect("sample to parse");
        assert_scene(&scene).page(0, |page| {
            page.block(0, |block| {
                block.title("Nope");
            });
        });
    }
}
