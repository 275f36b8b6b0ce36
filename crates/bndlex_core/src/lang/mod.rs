//! Manifest vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `PunctuationId`) and look up spellings/metadata via registry tables
//! instead of comparing raw characters across the codebase.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer decides *when* a character is special; registries only say *which* characters are.
//!
//! ## Examples
//! ```rust
//! use bndlex_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_char(PunctuationId::Semicolon), ';');
//! ```

pub mod punctuation;
