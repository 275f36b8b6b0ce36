//! Provide the canonical vocabulary shared by the bndlex scanner and its tooling.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed tables the scanner closes over, so that
//! the lexer, the CLI dump writer and any downstream consumer agree on a single source of truth.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no scanner types.
//! - Current scope: the special-character table (punctuation that is tokenized individually inside header values).

pub mod lang;
