//! Restartable scanner for bnd-style manifests
//!
//! Handles tokenization of:
//! - Header names (`Bundle-Name` in `Bundle-Name: demo`) and the header colon
//! - Header values, split into runs of text and one-character special tokens (`( ) , : ; = [ ] " \`)
//! - `#` comment lines, blank lines (section ends), indentation and line continuations
//!
//! The scanner is total: every byte of the input lands in exactly one token and malformed structure never produces
//! an error. It is also restartable: the only state carried from one token to the next is a two-valued
//! [`LexState`], so an editor can resume scanning at any earlier token boundary.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Span)
//! - `state` - The persisted resumption state
//! - `lookback` - Two-character lookback for line-start detection

mod lookback;
mod state;
pub mod tokens;

pub use state::LexState;
pub use tokens::{Span, Token, TokenKind};

use bndlex_core::lang::punctuation::{self, PunctuationId};
use lookback::Lookback;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Transitions (simplified), evaluated in order at every token start:
//
// [end of window]        → sentinel
// [logical line start]   → ' ' WHITESPACE | '\n' SECTION_END | '#' COMMENT
//                          | otherwise HEADER_NAME (stops at ':' → HeaderSeparator)
// [HeaderSeparator]      → ':' COLON (stay) | ' ' WHITESPACE → Initial
// [value]                → Initial; '\n' NEWLINE / SECTION_END after a comment
//                          | special char | ' ' WHITESPACE | HEADER_VALUE_PART
// ============================================================================

/// Cursor-style scanner over a byte window of a manifest.
///
/// The current token is computed eagerly on construction and on every [`Lexer::advance`]; inspect it through the
/// `token_*` accessors. The lexer is also an [`Iterator`] over the remaining tokens.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    end: usize,
    token_start: usize,
    token_end: usize,
    /// Kind of the current token; `None` at end-of-stream (and before the first scan).
    kind: Option<TokenKind>,
    state: LexState,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the whole of `source`, starting in [`LexState::Initial`].
    pub fn new(source: &'a str) -> Self {
        Self::with_range(source, 0, source.len(), LexState::Initial.as_raw())
    }

    /// Create a lexer over `[start, end)` of `source`, resuming from a persisted state.
    pub fn with_range(source: &'a str, start: usize, end: usize, initial_state: i32) -> Self {
        let mut lexer = Self {
            source,
            bytes: source.as_bytes(),
            end: 0,
            token_start: 0,
            token_end: 0,
            kind: None,
            state: LexState::Initial,
        };
        lexer.reset(source, start, end, initial_state);
        lexer
    }

    /// Restart on a (possibly different) buffer and window, then compute the first token.
    ///
    /// `end` is clamped to the buffer length and `start` to `end`. Any non-zero `initial_state` decodes to
    /// [`LexState::HeaderSeparator`].
    pub fn reset(&mut self, source: &'a str, start: usize, end: usize, initial_state: i32) {
        self.source = source;
        self.bytes = source.as_bytes();
        self.end = end.min(source.len());
        self.token_start = start.min(self.end);
        self.token_end = self.token_start;
        self.kind = None;
        self.state = LexState::from_raw(initial_state);
        self.scan_token();
    }

    /// Move past the current token and compute the next one.
    pub fn advance(&mut self) {
        self.token_start = self.token_end;
        self.scan_token();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Kind of the current token, or `None` at end-of-stream.
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.kind
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn token_end(&self) -> usize {
        self.token_end
    }

    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.token_end)
    }

    /// The current token, or `None` at end-of-stream.
    pub fn token(&self) -> Option<Token> {
        self.kind.map(|kind| Token::new(kind, self.token_span()))
    }

    /// Text of the current token. Empty at end-of-stream or when the caller's window splits a UTF-8 character.
    pub fn token_text(&self) -> &'a str {
        self.source.get(self.token_start..self.token_end).unwrap_or("")
    }

    /// Persistable state after the current token (`0` or `1`).
    pub fn state(&self) -> i32 {
        self.state.as_raw()
    }

    pub fn lex_state(&self) -> LexState {
        self.state
    }

    pub fn buffer(&self) -> &'a str {
        self.source
    }

    pub fn buffer_end(&self) -> usize {
        self.end
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.token_start;
        let Some(&c) = self.bytes.get(start).filter(|_| start < self.end) else {
            self.kind = None;
            self.token_end = start;
            return;
        };

        if is_logical_line_start(self.bytes, start) {
            self.scan_line_start(start, c);
            return;
        }

        if self.state == LexState::HeaderSeparator {
            match c {
                b':' => {
                    self.finish(TokenKind::Punctuation(PunctuationId::Colon), start + 1);
                    return;
                }
                b' ' => {
                    self.state = LexState::Initial;
                    self.finish(TokenKind::Whitespace, start + 1);
                    return;
                }
                _ => {}
            }
        }

        self.scan_value(start, c);
    }

    /// First token of a logical line. Re-synchronizes the state: an unterminated header is abandoned here.
    fn scan_line_start(&mut self, start: usize, c: u8) {
        self.state = LexState::Initial;

        match c {
            b' ' => self.finish(TokenKind::Whitespace, start + 1),
            b'\n' => self.finish(TokenKind::SectionEnd, start + 1),
            b'#' => {
                let end = self.scan_while(start + 1, |b| b != b'\n');
                self.finish(TokenKind::Comment, end);
            }
            _ => {
                let end = self.scan_while(start + 1, |b| b != b':' && b != b'\n');
                if end < self.end && self.bytes.get(end) == Some(&b':') {
                    self.state = LexState::HeaderSeparator;
                }
                self.finish(TokenKind::HeaderName, end);
            }
        }
    }

    fn scan_value(&mut self, start: usize, c: u8) {
        self.state = LexState::Initial;

        if c == b'\n' {
            // A comment line is closed like a blank line.
            let kind = if self.kind == Some(TokenKind::Comment) {
                TokenKind::SectionEnd
            } else {
                TokenKind::Newline
            };
            self.finish(kind, start + 1);
        } else if let Some(id) = punctuation::from_byte(c) {
            self.finish(TokenKind::Punctuation(id), start + 1);
        } else if c == b' ' {
            self.finish(TokenKind::Whitespace, start + 1);
        } else {
            let end = self.scan_while(start + 1, |b| b != b'\n' && !punctuation::is_special_byte(b));
            self.finish(TokenKind::HeaderValuePart, end);
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// First offset in `[from, end)` whose byte fails `keep`, or `end`.
    fn scan_while(&self, from: usize, keep: impl Fn(u8) -> bool) -> usize {
        let window = self.bytes.get(from..self.end).unwrap_or(&[]);
        window
            .iter()
            .position(|&b| !keep(b))
            .map_or(self.end.max(from), |i| from + i)
    }

    fn finish(&mut self, kind: TokenKind, end: usize) {
        self.kind = Some(kind);
        self.token_end = end.min(self.end);
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.token()?;
        self.advance();
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// `true` if `pos` begins a logical line: buffer offset 0, or right after a line feed that is not escaped by a
/// backslash (continuation lines belong to the previous logical line).
pub(crate) fn is_logical_line_start(bytes: &[u8], pos: usize) -> bool {
    Lookback::before(bytes, pos).is_line_start()
}

// ============================================================================
// Convenience entry points
// ============================================================================

/// Lex a whole source string.
///
/// This is a shorthand for `Lexer::new(source).collect()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex `[start, end)` of `source`, resuming from a persisted state.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn lex_range(source: &str, start: usize, end: usize, initial_state: i32) -> Vec<Token> {
    Lexer::with_range(source, start, end, initial_state).collect()
}

/// Lex `[start, end)` and pair every token with the state a fresh lexer needs to resume at that token's start.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn lex_with_states(source: &str, start: usize, end: usize, initial_state: LexState) -> Vec<(Token, LexState)> {
    let mut lexer = Lexer::with_range(source, start, end, initial_state.as_raw());
    let mut out = Vec::new();
    let mut resume = initial_state;

    while let Some(token) = lexer.token() {
        out.push((token, resume));
        resume = lexer.lex_state();
        lexer.advance();
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
