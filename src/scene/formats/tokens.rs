//! Token dump: one `line:column Kind "image"` line per token
//!
//! Whitespace and comments are not in the dump, it shows exactly what the parser was fed.

use super::registry::{FormatOptions, Formatter};
use crate::scene::error::SceneError;
use crate::scene::lexing::tokens::Token;
use crate::scene::pipeline::ParseResult;

pub fn to_token_dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{} {} {:?}\n",
                token.line(),
                token.column(),
                token.kind,
                token.image
            )
        })
        .collect()
}

pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn serialize(
        &self,
        result: &ParseResult,
        _options: &FormatOptions,
    ) -> Result<String, SceneError> {
        let tokens = result
            .tokens()
            .ok_or_else(|| SceneError::NothingToShow(self.name().to_string()))?;
        Ok(to_token_dump(tokens))
    }

    fn description(&self) -> &str {
        "The token stream, one token per line"
    }
}
