//! Token dump writer
//!
//! Collects tokens and renders them as text lines or as a JSON array.

use serde::Serialize;

use super::DumpError;
use super::config::{DumpConfig, DumpFormat};
use crate::lexer::{LexState, Token};

/// Width of the kind column (`HEADER_VALUE_PART`).
const KIND_WIDTH: usize = 17;

/// One token as serialized in JSON dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Writer that renders a token stream according to a [`DumpConfig`]
pub struct DumpWriter {
    /// Text output buffer
    output: String,
    /// Records for JSON output
    records: Vec<TokenRecord>,
    /// Configuration
    config: DumpConfig,
}

impl DumpWriter {
    /// Create a new dump writer with the given config
    pub fn new(config: DumpConfig) -> Self {
        Self {
            output: String::new(),
            records: Vec::new(),
            config,
        }
    }

    /// Add one token. `state` is the state a fresh scan needs to resume at the token's start.
    pub fn token(&mut self, token: &Token, state: LexState, text: &str) {
        match self.config.format {
            DumpFormat::Text => self.write_line(token, state, text),
            DumpFormat::Json => self.records.push(TokenRecord {
                kind: token.kind.name(),
                start: token.span.start,
                end: token.span.end,
                state: self.config.show_state.then_some(state.as_raw()),
                text: self.config.show_text.then(|| text.to_string()),
            }),
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> Result<String, DumpError> {
        match self.config.format {
            DumpFormat::Text => Ok(self.output),
            DumpFormat::Json => Ok(serde_json::to_string_pretty(&self.records)? + "\n"),
        }
    }

    fn write_line(&mut self, token: &Token, state: LexState, text: &str) {
        let mut line = format!(
            "{:<width$} {}..{}",
            token.kind.name(),
            token.span.start,
            token.span.end,
            width = KIND_WIDTH
        );
        if self.config.show_state {
            line.push_str(&format!(" [{}]", state.as_raw()));
        }
        if self.config.show_text {
            line.push(' ');
            line.push_str(&self.display_text(text));
        }
        self.output.push_str(&line);
        self.output.push('\n');
    }

    /// Debug-escaped text, truncated to `max_text_width` characters.
    fn display_text(&self, text: &str) -> String {
        let max = self.config.max_text_width;
        if max == 0 || text.chars().count() <= max {
            return format!("{text:?}");
        }
        let shown: String = text.chars().take(max).collect();
        format!("{shown:?}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind};

    fn header_token() -> Token {
        Token::new(TokenKind::HeaderName, Span::new(0, 11))
    }

    #[test]
    fn test_new_writer_empty_output() {
        let writer = DumpWriter::new(DumpConfig::default());
        assert_eq!(writer.finish().unwrap(), "");
    }

    #[test]
    fn test_text_line() {
        let mut writer = DumpWriter::new(DumpConfig::default());
        writer.token(&header_token(), LexState::Initial, "Bundle-Name");
        assert_eq!(writer.finish().unwrap(), "HEADER_NAME       0..11 [0] \"Bundle-Name\"\n");
    }

    #[test]
    fn test_text_line_without_state_and_text() {
        let config = DumpConfig::new().with_state(false).with_text(false);
        let mut writer = DumpWriter::new(config);
        writer.token(&header_token(), LexState::Initial, "Bundle-Name");
        assert_eq!(writer.finish().unwrap(), "HEADER_NAME       0..11\n");
    }

    #[test]
    fn test_text_is_escaped_and_truncated() {
        let config = DumpConfig::new().with_state(false).with_max_text_width(4);
        let mut writer = DumpWriter::new(config);
        writer.token(
            &Token::new(TokenKind::Comment, Span::new(0, 9)),
            LexState::Initial,
            "# comment",
        );
        writer.token(&Token::new(TokenKind::Newline, Span::new(9, 10)), LexState::Initial, "\n");
        assert_eq!(
            writer.finish().unwrap(),
            "COMMENT           0..9 \"# co\"...\nNEWLINE           9..10 \"\\n\"\n"
        );
    }

    #[test]
    fn test_json_records() {
        let config = DumpConfig::new().with_format(DumpFormat::Json).with_text(false);
        let mut writer = DumpWriter::new(config);
        writer.token(&header_token(), LexState::HeaderSeparator, "Bundle-Name");
        let json: serde_json::Value = serde_json::from_str(&writer.finish().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "kind": "HEADER_NAME", "start": 0, "end": 11, "state": 1 }])
        );
    }
}
