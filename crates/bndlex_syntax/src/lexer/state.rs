//! Resumption state of the scanner.

/// The scanner's entire externally visible resumption state.
///
/// A fresh [`Lexer`](super::Lexer) started at a token boundary with the state captured there continues the original
/// token stream. The state persists across editor sessions as a plain integer, see [`LexState::as_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexState {
    /// At a logical line boundary or inside a value (raw `0`).
    #[default]
    Initial,
    /// A header name just stopped at its `:`; the colon and the separating space come next (raw `1`).
    HeaderSeparator,
}

impl LexState {
    /// Decode a persisted state. `0` is [`LexState::Initial`]; any other value collapses to
    /// [`LexState::HeaderSeparator`].
    pub const fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            LexState::Initial
        } else {
            LexState::HeaderSeparator
        }
    }

    /// Encode for persistence (`0` or `1`).
    pub const fn as_raw(self) -> i32 {
        match self {
            LexState::Initial => 0,
            LexState::HeaderSeparator => 1,
        }
    }
}
