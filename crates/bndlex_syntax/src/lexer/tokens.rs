//! Token types for the manifest scanner.
//!
//! The scanner uses **registry-backed IDs** for special characters:
//! - `Punctuation(PunctuationId)` for the one-character tokens inside header values (and the header colon)
//!
//! ## Notes
//! - Tokens never own text. Slice the source with [`Token::text`] when the spelling matters.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use bndlex_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// SPANS
// ============================================================================

/// Source location span (half-open byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
///
/// End-of-stream has no kind: cursor accessors return `None` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Layout ==========
    Whitespace,
    /// Blank line, or the line feed closing a comment line.
    SectionEnd,
    Newline,

    // ========== Content ==========
    Comment,
    HeaderName,
    HeaderValuePart,

    // ========== Special characters (ID-based) ==========
    Punctuation(PunctuationId),
}

impl TokenKind {
    /// Upper-case catalog name (`HEADER_NAME`, `OPEN_PAREN`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::SectionEnd => "SECTION_END",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
            TokenKind::HeaderName => "HEADER_NAME",
            TokenKind::HeaderValuePart => "HEADER_VALUE_PART",
            TokenKind::Punctuation(id) => punctuation::name(*id),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The text this token covers, or `None` if the span is not a valid slice of `source`.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.start..self.span.end)
    }
}
