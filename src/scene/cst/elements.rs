//! CST node definitions, one module per part of a scene
//!
//!     A scene is a list of pages. A page holds groups of blocks, and a group may start with a
//!     blockalign that regroups named blocks. A block holds groups of elements, and a group may
//!     start with a direction that lays its items out in rows or columns. Elements are items
//!     (one widget per line) and lists (a repeated item template).
//!
//!         Page: Login
//!         Block: Form
//!             Two columns
//!             Field "Email"
//!             Field "Password"
//!
//!         Button "Sign in"
//!
//!     Indentation is cosmetic: structure comes from the keywords alone. A blank line closes the
//!     items of a list.

pub mod block;
pub mod content;
pub mod direction;
pub mod page;
pub mod scene;
pub mod value;

pub use block::{Block, BlockAlign, Blocks};
pub use content::{Element, Elements, Item, ItemContent, ItemKind, List};
pub use direction::{Axis, Direction, Number};
pub use page::{Device, DeviceTag, Page};
pub use scene::{Comment, Scene};
pub use value::{Literal, Value};
