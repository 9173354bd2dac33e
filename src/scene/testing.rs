//! Testing utilities for scene trees
//!
//! Two tools that are meant to be used together:
//!
//! 1. [samples] - scenes known to parse, in every supported language
//! 2. [assert_scene] - a fluent API for checking the shape and content of a CST
//!
//! ## Why a fluent API
//!
//! Checking a CST by hand means matching through pages, block groups, element groups and
//! entries before getting to the one field a test cares about:
//!
//! ```rust-example
//! let page = &scene.pages[0];
//! let block = page.all_blocks().nth(1).unwrap();
//! match &block.elements[0].entries[0] {
//!     Element::Item(item) => assert_eq!(item.kind(), Some(ItemKind::Button)),
//!     _ => panic!("expected an item"),
//! }
//! ```
//!
//! With `assert_scene` the same check reads like the scene:
//!
//! ```rust-example
//! use imagineui::scene::testing::assert_scene;
//!
//! assert_scene(&scene)
//!     .page_count(1)
//!     .page(0, |page| {
//!         page.title("Login").block(1, |block| {
//!             block.title("Service").item(0, |item| {
//!                 item.kind(ItemKind::Button);
//!             });
//!         });
//!     });
//! ```
//!
//! Failures name the path to the node (`pages[0].blocks[1].items[0]`) and what was found
//! instead.

mod testing_assertions;

pub mod samples;

pub use testing_assertions::{
    assert_scene, BlockAssertion, BlocksAssertion, ElementsAssertion, ItemAssertion,
    ListAssertion, PageAssertion, SceneAssertion,
};
