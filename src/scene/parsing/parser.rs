//! Scene grammar and its per-call parser state

use crate::scene::cst::elements::{
    Axis, Block, BlockAlign, Blocks, Device, DeviceTag, Direction, Element, Elements, Item,
    ItemContent, ItemKind, List, Literal, Number, Page, Scene, Value,
};
use crate::scene::cst::Rule;
use crate::scene::error::ParseError;
use crate::scene::lexing::tokens::{Keyword, Token, TokenKind, TokenPosition};
use crate::scene::locales::Locale;
use log::debug;

/// Errors recorded before the parser gives up, unless configured otherwise
pub const DEFAULT_MAX_PARSE_ERRORS: usize = 100;

const PAGE_START: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Mobile),
    TokenKind::Keyword(Keyword::Tablet),
    TokenKind::Keyword(Keyword::Widescreen),
    TokenKind::Keyword(Keyword::Page),
    TokenKind::LineEnd,
];
const BLOCK_START: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Blocks),
    TokenKind::Keyword(Keyword::Block),
    TokenKind::LineEnd,
];
const VALUE: &[TokenKind] = &[
    TokenKind::StringLiteral,
    TokenKind::Variable,
    TokenKind::NaturalLiteral,
];
const LITERAL: &[TokenKind] = &[TokenKind::StringLiteral, TokenKind::Variable];
const AXIS: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Rows),
    TokenKind::Keyword(Keyword::Columns),
];
const ITEM_START: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Field),
    TokenKind::Keyword(Keyword::Button),
    TokenKind::Keyword(Keyword::Header),
    TokenKind::Keyword(Keyword::Image),
    TokenKind::Keyword(Keyword::Space),
    TokenKind::StringLiteral,
    TokenKind::Variable,
];
const ELEMENT_START: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Field),
    TokenKind::Keyword(Keyword::Button),
    TokenKind::Keyword(Keyword::Header),
    TokenKind::Keyword(Keyword::Image),
    TokenKind::Keyword(Keyword::Space),
    TokenKind::StringLiteral,
    TokenKind::Variable,
    TokenKind::Keyword(Keyword::List),
    TokenKind::NumberLiteral,
    TokenKind::Keyword(Keyword::Rows),
    TokenKind::Keyword(Keyword::Columns),
    TokenKind::LineEnd,
];

fn starts_page(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(Keyword::Page | Keyword::Mobile | Keyword::Tablet | Keyword::Widescreen)
    )
}

fn ends_block(kind: TokenKind) -> bool {
    starts_page(kind) || matches!(kind, TokenKind::Keyword(Keyword::Block | Keyword::Blocks))
}

fn starts_number(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::NumberLiteral | TokenKind::Numeral(_))
}

fn starts_direction(kind: TokenKind) -> bool {
    starts_number(kind) || matches!(kind, TokenKind::Keyword(Keyword::Rows | Keyword::Columns))
}

fn starts_item(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Keyword(keyword) => ItemKind::from_keyword(keyword).is_some(),
        TokenKind::StringLiteral | TokenKind::Variable => true,
        _ => false,
    }
}

fn starts_elements(kind: TokenKind) -> bool {
    starts_direction(kind)
        || starts_item(kind)
        || matches!(kind, TokenKind::Keyword(Keyword::List) | TokenKind::LineEnd)
}

/// The tree plus whatever went wrong while building it
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Best-effort tree: nodes whose header could not be parsed are left out
    pub scene: Scene,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// The scene grammar for one locale
///
/// The productions are the same for every locale; the locale only decides which token stream
/// the grammar is fed.
#[derive(Debug, Clone)]
pub struct SceneGrammar {
    locale: Locale,
}

impl SceneGrammar {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Parse a token stream into a scene. Whitespace and comment tokens in the input are
    /// ignored, so a full lexer dump can be passed in as well.
    pub fn parse_tokens(&self, tokens: &[Token]) -> ParseOutput {
        self.parse_tokens_with_limit(tokens, DEFAULT_MAX_PARSE_ERRORS)
    }

    /// Like [SceneGrammar::parse_tokens], stopping once `max_errors` errors were recorded.
    pub fn parse_tokens_with_limit(&self, tokens: &[Token], max_errors: usize) -> ParseOutput {
        let mut parser = Parser::new(tokens, max_errors);
        let scene = parser.scene();
        debug!(
            "parsed {} pages with {} errors ({})",
            scene.pages.len(),
            parser.errors.len(),
            self.locale
        );
        ParseOutput {
            scene,
            errors: parser.errors,
        }
    }
}

struct Parser<'t> {
    tokens: Vec<&'t Token>,
    cursor: usize,
    errors: Vec<ParseError>,
    rule_stack: Vec<Rule>,
    max_errors: usize,
    end: TokenPosition,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token], max_errors: usize) -> Self {
        let tokens: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_skipped()).collect();
        let end = match tokens.last() {
            Some(last) => TokenPosition::at(last.range.span.end, last.range.end),
            None => TokenPosition::at(0, Default::default()),
        };
        Self {
            tokens,
            cursor: 0,
            errors: Vec::new(),
            rule_stack: Vec::new(),
            max_errors: max_errors.max(1),
            end,
        }
    }

    // ----------------------------------------------------------------------
    // Cursor
    // ----------------------------------------------------------------------

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.cursor += 1;
        Some(token.clone())
    }

    /// Consume the next token if it is of `kind`.
    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            self.bump()
        } else {
            None
        }
    }

    /// Consume the next token if it is of `kind`, record an error otherwise.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Option<Token> {
        let token = self.eat(kind);
        if token.is_none() {
            self.error(message, &[kind]);
        }
        token
    }

    /// Skip past the end of the current line. Returns the line end, unless the input ran out.
    fn recover_line(&mut self) -> Option<Token> {
        while let Some(token) = self.bump() {
            if token.kind == TokenKind::LineEnd {
                return Some(token);
            }
        }
        None
    }

    fn halted(&self) -> bool {
        self.errors.len() >= self.max_errors
    }

    fn enter(&mut self, rule: Rule) {
        self.rule_stack.push(rule);
    }

    fn leave(&mut self) {
        self.rule_stack.pop();
    }

    fn error(&mut self, message: &str, expected: &[TokenKind]) {
        let found = self.peek();
        self.error_at(found, message, expected);
    }

    fn error_at(&mut self, token: Option<&Token>, message: &str, expected: &[TokenKind]) {
        if self.halted() {
            return;
        }
        let (found, position, description) = match token {
            Some(token) => (
                token.kind.name().to_string(),
                token.position(),
                format!("{} {:?}", token.kind, token.image),
            ),
            None => ("EOF".to_string(), self.end, "the end of input".to_string()),
        };
        self.errors.push(ParseError {
            message: format!("{message}, found {description}"),
            expected: expected.iter().map(|kind| kind.name().to_string()).collect(),
            found,
            token: position,
            rule_stack: self.rule_stack.iter().map(|rule| rule.name().to_string()).collect(),
        });
        if self.halted() {
            debug!("error limit of {} reached, parsing stopped", self.max_errors);
        }
    }

    // ----------------------------------------------------------------------
    // Rules
    // ----------------------------------------------------------------------

    fn scene(&mut self) -> Scene {
        self.enter(Rule::Scene);
        let mut scene = Scene::default();
        while let Some(kind) = self.peek_kind() {
            if self.halted() {
                break;
            }
            match kind {
                TokenKind::LineEnd => scene.line_ends.extend(self.bump()),
                kind if starts_page(kind) => {
                    if let Some(page) = self.page() {
                        scene.pages.push(page);
                    }
                }
                _ => {
                    self.error("expected a page", PAGE_START);
                    self.recover_line();
                }
            }
        }
        self.leave();
        scene
    }

    fn page(&mut self) -> Option<Page> {
        self.enter(Rule::Page);
        let header = self.page_header();
        if header.is_none() {
            self.recover_line();
        }

        let mut groups = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if self.halted() || starts_page(kind) {
                break;
            }
            match kind {
                TokenKind::Keyword(Keyword::Blocks | Keyword::Block) | TokenKind::LineEnd => {
                    let group = self.blocks();
                    if !group.is_empty() {
                        groups.push(group);
                    }
                }
                _ => {
                    self.error("expected a block", BLOCK_START);
                    self.recover_line();
                }
            }
        }
        self.leave();

        let (device, keyword, value, line_end) = header?;
        Some(Page {
            device,
            keyword,
            value,
            line_end,
            blocks: groups,
        })
    }

    fn page_header(&mut self) -> Option<(Option<DeviceTag>, Token, Value, Token)> {
        let device = match self.peek_kind() {
            Some(TokenKind::Keyword(keyword)) => match Device::from_keyword(keyword) {
                Some(device) => self.bump().map(|token| DeviceTag { device, token }),
                None => None,
            },
            _ => None,
        };
        let keyword = self.expect(TokenKind::Keyword(Keyword::Page), "expected the page keyword")?;
        let value = self.value("expected the page title")?;
        let line_end = self.expect(TokenKind::LineEnd, "expected the end of the page title")?;
        Some((device, keyword, value, line_end))
    }

    fn blocks(&mut self) -> Blocks {
        self.enter(Rule::Blocks);
        let align = if self.at(TokenKind::Keyword(Keyword::Blocks)) {
            self.block_align()
        } else {
            None
        };
        let mut group = Blocks {
            align,
            blocks: Vec::new(),
            line_ends: Vec::new(),
        };

        while let Some(kind) = self.peek_kind() {
            if self.halted() {
                break;
            }
            match kind {
                TokenKind::Keyword(Keyword::Block) => {
                    if let Some(block) = self.block() {
                        group.blocks.push(block);
                    }
                }
                TokenKind::LineEnd => group.line_ends.extend(self.bump()),
                kind if ends_block(kind) => break,
                _ => {
                    self.error("expected a block", BLOCK_START);
                    self.recover_line();
                }
            }
        }
        self.leave();
        group
    }

    fn block_align(&mut self) -> Option<BlockAlign> {
        self.enter(Rule::BlockAlign);
        let align = self.try_block_align();
        if align.is_none() {
            self.recover_line();
        }
        self.leave();
        align
    }

    fn try_block_align(&mut self) -> Option<BlockAlign> {
        let keyword = self.expect(TokenKind::Keyword(Keyword::Blocks), "expected the blocks keyword")?;
        let mut names = Vec::new();
        let mut commas = Vec::new();
        if let Some(name) = self.optional_literal() {
            names.push(name);
            while let Some(comma) = self.eat(TokenKind::Comma) {
                commas.push(comma);
                names.push(self.literal("expected a block name after the comma")?);
            }
        }
        let aligned = self.expect(TokenKind::Keyword(Keyword::Aligned), "expected 'aligned'")?;
        let direction = self.direction()?;
        Some(BlockAlign {
            keyword,
            names,
            commas,
            aligned,
            direction,
        })
    }

    fn block(&mut self) -> Option<Block> {
        self.enter(Rule::Block);
        let header = self.block_header();
        if header.is_none() {
            self.recover_line();
        }

        let mut groups = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if self.halted() || ends_block(kind) {
                break;
            }
            if starts_elements(kind) {
                let group = self.elements();
                if !group.is_empty() {
                    groups.push(group);
                }
            } else {
                self.error("expected an item, a list or a direction", ELEMENT_START);
                self.recover_line();
            }
        }
        self.leave();

        let (keyword, title, line_end) = header?;
        Some(Block {
            keyword,
            title,
            line_end,
            elements: groups,
        })
    }

    fn block_header(&mut self) -> Option<(Token, Option<Value>, Token)> {
        let keyword = self.expect(TokenKind::Keyword(Keyword::Block), "expected the block keyword")?;
        let title = self.optional_value();
        let line_end = self.expect(TokenKind::LineEnd, "expected the end of the block title")?;
        Some((keyword, title, line_end))
    }

    fn elements(&mut self) -> Elements {
        self.enter(Rule::Elements);
        let direction = match self.peek_kind() {
            Some(kind) if starts_direction(kind) => self.direction_line(),
            _ => None,
        };
        let mut group = Elements {
            direction,
            entries: Vec::new(),
            line_ends: Vec::new(),
        };

        while let Some(kind) = self.peek_kind() {
            if self.halted() || ends_block(kind) || starts_direction(kind) {
                break;
            }
            match kind {
                TokenKind::LineEnd => group.line_ends.extend(self.bump()),
                TokenKind::Keyword(Keyword::List) => {
                    if let Some(list) = self.list() {
                        group.entries.push(Element::List(list));
                    }
                }
                kind if starts_item(kind) => {
                    if let Some(item) = self.item() {
                        group.entries.push(Element::Item(item));
                    }
                }
                _ => {
                    self.error("expected an item or a list", ELEMENT_START);
                    self.recover_line();
                }
            }
        }
        self.leave();
        group
    }

    /// A direction on its own line, recovering on failure
    fn direction_line(&mut self) -> Option<Direction> {
        let direction = self.direction();
        if direction.is_none() {
            self.recover_line();
        }
        direction
    }

    fn direction(&mut self) -> Option<Direction> {
        self.enter(Rule::Direction);
        let direction = self.try_direction();
        self.leave();
        direction
    }

    fn try_direction(&mut self) -> Option<Direction> {
        let count = match self.peek_kind() {
            Some(kind) if starts_number(kind) => self.number(),
            _ => None,
        };
        let axis = match self.peek_kind() {
            Some(TokenKind::Keyword(Keyword::Rows)) => Axis::Row,
            Some(TokenKind::Keyword(Keyword::Columns)) => Axis::Column,
            _ => {
                self.error("expected rows or columns", AXIS);
                return None;
            }
        };
        let axis_keyword = self.bump()?;
        let line_end = self.expect(TokenKind::LineEnd, "expected the end of the direction")?;
        Some(Direction {
            count,
            axis_keyword,
            axis,
            line_end,
        })
    }

    /// A count from zero to twelve. Anything else, negative, fractional or too large, is reported
    /// but does not stop the enclosing rule.
    fn number(&mut self) -> Option<Number> {
        self.enter(Rule::Number);
        let token = self.bump()?;
        let value = match token.kind {
            TokenKind::Numeral(numeral) => Some(numeral.value()),
            TokenKind::NumberLiteral => token.image.parse::<u8>().ok().filter(|value| *value <= 12),
            _ => None,
        };
        if value.is_none() {
            self.error_at(
                Some(&token),
                "expected a whole number from 0 to 12",
                &[TokenKind::NumberLiteral],
            );
        }
        self.leave();
        value.map(|value| Number { token, value })
    }

    fn item(&mut self) -> Option<Item> {
        self.enter(Rule::Item);
        let item = self.try_item();
        if item.is_none() {
            self.recover_line();
        }
        self.leave();
        item
    }

    fn try_item(&mut self) -> Option<Item> {
        let widget = match self.peek_kind() {
            Some(TokenKind::Keyword(keyword)) => ItemKind::from_keyword(keyword),
            _ => None,
        };
        let content = match widget {
            Some(kind) => {
                let keyword = self.bump()?;
                let value = self.optional_value();
                ItemContent::Widget {
                    kind,
                    keyword,
                    value,
                }
            }
            None if self.peek_kind().is_some_and(|kind| LITERAL.contains(&kind)) => {
                ItemContent::Literal(self.literal("expected an item")?)
            }
            None => {
                self.error("expected an item", ITEM_START);
                return None;
            }
        };
        let line_end = self.expect(TokenKind::LineEnd, "expected the end of the item")?;
        Some(Item { content, line_end })
    }

    fn list(&mut self) -> Option<List> {
        self.enter(Rule::List);
        let list = self.try_list();
        if list.is_none() {
            self.recover_line();
        }
        self.leave();
        list
    }

    fn try_list(&mut self) -> Option<List> {
        let keyword = self.expect(TokenKind::Keyword(Keyword::List), "expected the list keyword")?;
        let title = self.optional_value();
        let header_end = self.eat(TokenKind::LineEnd);
        let consists_of =
            self.expect(TokenKind::Keyword(Keyword::ConsistsOf), "expected 'consists of'")?;
        let line_end = self.expect(TokenKind::LineEnd, "expected the end of the list header")?;

        let mut items = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if self.halted() || !starts_item(kind) {
                break;
            }
            if let Some(item) = self.item() {
                items.push(item);
            }
        }
        Some(List {
            keyword,
            title,
            header_end,
            consists_of,
            line_end,
            items,
        })
    }

    fn value(&mut self, message: &str) -> Option<Value> {
        self.enter(Rule::Value);
        let value = self.optional_value();
        if value.is_none() {
            self.error(message, VALUE);
        }
        self.leave();
        value
    }

    fn optional_value(&mut self) -> Option<Value> {
        match self.peek_kind()? {
            TokenKind::NaturalLiteral => self.bump().map(Value::Natural),
            TokenKind::StringLiteral => self.bump().map(Value::String),
            TokenKind::Variable => self.bump().map(Value::Variable),
            _ => None,
        }
    }

    fn literal(&mut self, message: &str) -> Option<Literal> {
        self.enter(Rule::Literal);
        let literal = self.optional_literal();
        if literal.is_none() {
            self.error(message, LITERAL);
        }
        self.leave();
        literal
    }

    fn optional_literal(&mut self) -> Option<Literal> {
        match self.peek_kind()? {
            TokenKind::StringLiteral => self.bump().map(Literal::String),
            TokenKind::Variable => self.bump().map(Literal::Variable),
            _ => None,
        }
    }
}
