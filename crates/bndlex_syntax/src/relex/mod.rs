//! Incremental relexing driven by text edits.
//!
//! [`LexedDocument`] keeps a token stream together with the resume state of every token. On an edit it restarts a
//! fresh [`Lexer`] at the closest logical line start before the change and stops as soon as the new stream lines up
//! with the old one again; everything after that point is reused with shifted offsets.
//!
//! ## Notes
//! - Restart points are always logical line starts. This sidesteps the one distinction the two-valued state cannot
//!   carry (a line feed right after a comment).
//! - After any sequence of edits, `tokens()` is identical to `lexer::lex(source())`.
//!
//! ## Module Structure
//!
//! - `verify` - Whole-buffer check of the resumption contract

mod verify;

pub use verify::{ResumeMismatch, ResumeReport, verify_resumption};

use thiserror::Error;

use crate::lexer::{LexState, Lexer, Span, Token, TokenKind, is_logical_line_start, lex_with_states};

/// Errors for edits that cannot be applied to the document text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelexError {
    #[error("edit range {start}..{end} is reversed")]
    ReversedRange { start: usize, end: usize },

    #[error("edit range {start}..{end} is out of bounds for a source of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("edit offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },
}

/// Replace `range` of the document with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(range: Span, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(Span::new(offset, offset), text)
    }

    pub fn delete(range: Span) -> Self {
        Self::new(range, String::new())
    }
}

/// What one [`LexedDocument::apply_edit`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelexStats {
    /// Offset (in the edited text) where scanning restarted.
    pub restart_offset: usize,
    /// Tokens produced by the fresh scan.
    pub relexed: usize,
    /// Tokens carried over from before the edit (prefix and shifted suffix).
    pub reused: usize,
}

/// A source text with its token stream and per-token resume states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexedDocument {
    source: String,
    tokens: Vec<Token>,
    /// `states[i]` is the state a fresh lexer needs to resume at `tokens[i].span.start`.
    states: Vec<LexState>,
}

impl LexedDocument {
    /// Fully lex `source`.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let (tokens, states) = lex_with_states(&source, 0, source.len(), LexState::Initial)
            .into_iter()
            .unzip();
        Self { source, tokens, states }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn states(&self) -> &[LexState] {
        &self.states
    }

    /// Apply an edit and re-lex only the region it can influence.
    #[tracing::instrument(skip_all, fields(start = edit.range.start, end = edit.range.end, inserted = edit.replacement.len()))]
    pub fn apply_edit(&mut self, edit: &TextEdit) -> Result<RelexStats, RelexError> {
        self.validate(edit.range)?;

        let Span {
            start: edit_start,
            end: old_edit_end,
        } = edit.range;
        let new_edit_end = edit_start + edit.replacement.len();

        let restart = self.restart_index(edit_start);
        let (restart_offset, restart_state) = match (self.tokens.get(restart), self.states.get(restart)) {
            (Some(token), Some(state)) => (token.span.start, *state),
            _ => (0, LexState::Initial),
        };
        tracing::debug!(restart, restart_offset, "restarting scan");

        self.source.replace_range(edit_start..old_edit_end, &edit.replacement);

        let mut fresh_tokens = Vec::new();
        let mut fresh_states = Vec::new();
        let mut resync = None;
        let mut prev_comment = false;
        let mut resume = restart_state;
        let mut lexer = Lexer::with_range(&self.source, restart_offset, self.source.len(), restart_state.as_raw());

        while let Some(token) = lexer.token() {
            let pos = token.span.start;
            // Two bytes past the edit, the lookback window only sees unchanged text.
            if pos >= new_edit_end + 2 {
                let old_pos = pos - new_edit_end + old_edit_end;
                if let Some(idx) = self.resync_index(old_pos, resume, prev_comment) {
                    resync = Some(idx);
                    break;
                }
            }
            fresh_tokens.push(token);
            fresh_states.push(resume);
            prev_comment = token.kind == TokenKind::Comment;
            resume = lexer.lex_state();
            lexer.advance();
        }

        let relexed = fresh_tokens.len();
        let shift = |offset: usize| offset - old_edit_end + new_edit_end;
        // Shift the reused suffix in place, then swap the relexed region.
        let tail = match resync {
            Some(idx) => {
                for token in &mut self.tokens[idx..] {
                    token.span = Span::new(shift(token.span.start), shift(token.span.end));
                }
                idx
            }
            None => self.tokens.len(),
        };
        self.tokens.splice(restart..tail, fresh_tokens);
        self.states.splice(restart..tail, fresh_states);

        let stats = RelexStats {
            restart_offset,
            relexed,
            reused: self.tokens.len() - relexed,
        };
        tracing::debug!(relexed = stats.relexed, reused = stats.reused, "relexed edit");
        Ok(stats)
    }

    fn validate(&self, range: Span) -> Result<(), RelexError> {
        let Span { start, end } = range;
        if start > end {
            return Err(RelexError::ReversedRange { start, end });
        }
        if end > self.source.len() {
            return Err(RelexError::OutOfBounds {
                start,
                end,
                len: self.source.len(),
            });
        }
        for offset in [start, end] {
            if !self.source.is_char_boundary(offset) {
                return Err(RelexError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }

    /// Last token that starts strictly before `offset` on a logical line start, or `0`.
    ///
    /// Tokens before it end before `offset`, so neither their text nor their stop character changes.
    fn restart_index(&self, offset: usize) -> usize {
        let below = self.tokens.partition_point(|t| t.span.start < offset);
        self.tokens[..below]
            .iter()
            .rposition(|t| is_logical_line_start(self.source.as_bytes(), t.span.start))
            .unwrap_or(0)
    }

    /// Old token index where the fresh scan can stop, if the old scanner was in the same state at `old_pos`.
    fn resync_index(&self, old_pos: usize, resume: LexState, prev_comment: bool) -> Option<usize> {
        let idx = self.tokens.binary_search_by_key(&old_pos, |t| t.span.start).ok()?;
        let old_prev_comment = idx
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|t| t.kind == TokenKind::Comment);
        (self.states.get(idx) == Some(&resume) && old_prev_comment == prev_comment).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use bndlex_core::lang::punctuation::PunctuationId;

    fn assert_matches_full_lex(doc: &LexedDocument) {
        assert_eq!(doc.tokens(), lex(doc.source()).as_slice(), "source: {:?}", doc.source());
        let expected: Vec<LexState> = lex_with_states(doc.source(), 0, doc.source().len(), LexState::Initial)
            .into_iter()
            .map(|(_, s)| s)
            .collect();
        assert_eq!(doc.states(), expected.as_slice());
    }

    #[test]
    fn test_new_document() {
        let doc = LexedDocument::new("a: b\n");
        assert_eq!(doc.tokens().len(), 5);
        assert_eq!(doc.states().len(), 5);
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_edit_inside_value_reuses_later_lines() {
        let mut doc = LexedDocument::new("A: one\nB: two\nC: three\n");
        let stats = doc.apply_edit(&TextEdit::new(Span::new(3, 6), "uno")).unwrap();
        assert_eq!(doc.source(), "A: uno\nB: two\nC: three\n");
        assert_eq!(stats.restart_offset, 0);
        assert!(stats.reused > 0, "{stats:?}");
        assert!(stats.relexed < doc.tokens().len());
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_reused_suffix_is_shifted_in_place() {
        let mut doc = LexedDocument::new("A: one\nB: two\nC: three\n");
        let stats = doc.apply_edit(&TextEdit::insert(3, "x")).unwrap();
        assert_eq!(doc.source(), "A: xone\nB: two\nC: three\n");
        assert_eq!(doc.tokens().len(), 15);
        assert_eq!(stats.relexed + stats.reused, 15);
        assert_eq!(doc.tokens()[3].span, Span::new(3, 7));
        assert_eq!(doc.tokens().last().map(|t| t.span), Some(Span::new(23, 24)));
        assert_eq!(doc.states().len(), doc.tokens().len());
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_edit_on_later_line_keeps_prefix() {
        let mut doc = LexedDocument::new("A: one\nB: two\nC: three\n");
        let stats = doc.apply_edit(&TextEdit::insert(10, "o")).unwrap();
        assert_eq!(doc.source(), "A: one\nB: otwo\nC: three\n");
        assert_eq!(stats.restart_offset, 7);
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_inserting_colon_turns_value_into_header() {
        let mut doc = LexedDocument::new("Name\nNext: x\n");
        doc.apply_edit(&TextEdit::insert(4, ": v")).unwrap();
        assert_eq!(doc.source(), "Name: v\nNext: x\n");
        assert_eq!(doc.tokens()[1].kind, TokenKind::Punctuation(PunctuationId::Colon));
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_inserting_continuation_changes_next_line() {
        let mut doc = LexedDocument::new("A: x\nB: y\n");
        doc.apply_edit(&TextEdit::insert(4, "\\")).unwrap();
        assert_eq!(doc.source(), "A: x\\\nB: y\n");
        // `B` is no longer at a logical line start.
        assert!(doc.tokens().iter().filter(|t| t.kind == TokenKind::HeaderName).count() == 1);
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_commenting_out_a_line() {
        let mut doc = LexedDocument::new("A: x\nB: y\n");
        doc.apply_edit(&TextEdit::insert(5, "#")).unwrap();
        assert_eq!(doc.source(), "A: x\n#B: y\n");
        assert_eq!(doc.tokens().last().map(|t| t.kind), Some(TokenKind::SectionEnd));
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_delete_everything_and_retype() {
        let mut doc = LexedDocument::new("A: x\n");
        doc.apply_edit(&TextEdit::delete(Span::new(0, 5))).unwrap();
        assert!(doc.tokens().is_empty());
        doc.apply_edit(&TextEdit::insert(0, "B: y")).unwrap();
        assert_matches_full_lex(&doc);
    }

    #[test]
    fn test_edit_errors() {
        let mut doc = LexedDocument::new("Naïve: x");
        assert_eq!(
            doc.apply_edit(&TextEdit::new(Span::new(3, 1), "")),
            Err(RelexError::ReversedRange { start: 3, end: 1 })
        );
        assert_eq!(
            doc.apply_edit(&TextEdit::insert(99, "z")),
            Err(RelexError::OutOfBounds {
                start: 99,
                end: 99,
                len: 9
            })
        );
        assert_eq!(
            doc.apply_edit(&TextEdit::insert(3, "z")),
            Err(RelexError::NotCharBoundary { offset: 3 })
        );
        // Failed edits leave the document untouched.
        assert_eq!(doc.source(), "Naïve: x");
        assert_matches_full_lex(&doc);
    }
}
