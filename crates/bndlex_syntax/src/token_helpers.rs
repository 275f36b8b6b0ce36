//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use bndlex_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the punctuation id, if this is a special-character token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given special character.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this token ends a physical line.
    pub fn is_line_break(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::SectionEnd)
    }

    /// Return `true` if a tree builder can skip this token without losing content.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::SectionEnd | TokenKind::Comment
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Convenience wrapper for `self.kind.is_trivia()`.
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
