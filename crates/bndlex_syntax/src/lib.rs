//! Shared syntax layer for bnd-style manifests: the restartable scanner and the incremental relexer built on it.
//!
//! This crate is dependency-light and intended for reuse across the CLI and any editor integration that wants to
//! re-lex only the changed region of a document.
//!
//! ## Notes
//! - This crate is intentionally “lexical-only”: it classifies spans of characters and never groups them into a tree,
//!   validates headers, or interprets escapes.
//! - Special-character identity comes from the `bndlex_core::lang::punctuation` registry.
//!
//! ## Examples
//! ```rust
//! use bndlex_syntax::lexer::{self, TokenKind};
//!
//! let tokens = lexer::lex("Bundle-Name: demo\n");
//! assert_eq!(tokens[0].kind, TokenKind::HeaderName);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Newline));
//! ```
//!
//! ## See also
//! - [`relex::LexedDocument`] for edit-driven incremental relexing.

pub mod lexer;
pub mod relex;
pub mod token_helpers;
