//! Page element
//!
//! A page is one screen of the scene. The optional device tag sets the width of the wireframe:
//!
//!     Mobile page: Sign in
//!     Широкоформатный экран: Каталог

use super::super::traits::{CstNode, Visitor};
use super::super::Rule;
use super::block::{Block, Blocks};
use super::value::Value;
use crate::scene::lexing::tokens::{Keyword, Token};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Tablet,
    Widescreen,
}

impl Device {
    pub fn from_keyword(keyword: Keyword) -> Option<Device> {
        match keyword {
            Keyword::Mobile => Some(Device::Mobile),
            Keyword::Tablet => Some(Device::Tablet),
            Keyword::Widescreen => Some(Device::Widescreen),
            _ => None,
        }
    }

    pub fn keyword(self) -> Keyword {
        match self {
            Device::Mobile => Keyword::Mobile,
            Device::Tablet => Keyword::Tablet,
            Device::Widescreen => Keyword::Widescreen,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Device::Mobile => "mobile",
            Device::Tablet => "tablet",
            Device::Widescreen => "widescreen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceTag {
    pub device: Device,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub device: Option<DeviceTag>,
    pub keyword: Token,
    pub value: Value,
    pub line_end: Token,
    pub blocks: Vec<Blocks>,
}

impl Page {
    pub fn title(&self) -> String {
        self.value.text()
    }

    pub fn device(&self) -> Option<Device> {
        self.device.as_ref().map(|tag| tag.device)
    }

    /// Every block of the page in declaration order, across groups
    pub fn all_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().flat_map(|group| group.blocks.iter())
    }
}

impl CstNode for Page {
    fn rule(&self) -> Rule {
        Rule::Page
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        if let Some(tag) = &self.device {
            out.push(&tag.token);
        }
        out.push(&self.keyword);
        self.value.collect_tokens(out);
        out.push(&self.line_end);
        for group in &self.blocks {
            group.collect_tokens(out);
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_page(self);
        self.value.accept(visitor);
        for group in &self.blocks {
            group.accept(visitor);
        }
        visitor.leave_page(self);
    }
}
