//! Token dumps
//!
//! This module renders the scanner's token stream for humans and tools:
//! - Text: one token per line, `KIND start..end [state] "text"`
//! - JSON: an array of `{kind, start, end, state, text}` records
//!
//! The state printed for a token is the one a fresh scan needs to resume at that token's start.

mod config;
mod writer;

pub use config::{DumpConfig, DumpFormat};
pub use writer::{DumpWriter, TokenRecord};

use thiserror::Error;

use crate::lexer::{self, LexState};

/// Errors that occur while rendering a dump
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

/// Dump the tokens of the whole source with default settings
pub fn dump_source(source: &str) -> Result<String, DumpError> {
    dump_range(source, 0, source.len(), 0, &DumpConfig::default())
}

/// Dump the tokens of `[start, end)`, resuming from `initial_state`
#[tracing::instrument(skip(source, config), fields(source_len = source.len()))]
pub fn dump_range(
    source: &str,
    start: usize,
    end: usize,
    initial_state: i32,
    config: &DumpConfig,
) -> Result<String, DumpError> {
    let mut writer = DumpWriter::new(config.clone());
    for (token, state) in lexer::lex_with_states(source, start, end, LexState::from_raw(initial_state)) {
        writer.token(&token, state, token.text(source).unwrap_or(""));
    }
    writer.finish()
}
