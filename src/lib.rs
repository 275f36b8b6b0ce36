#![forbid(unsafe_code)]
//! Restartable scanner for bnd-style manifest files
//!
//! bndlex tokenizes `Header-Name: value` manifests (OSGi `MANIFEST.MF`, bnd `.bnd` files) so that an editor can
//! re-scan any window of the buffer from a token boundary. This crate is the front door: it re-exports the scanner
//! crates and adds the token dumps and the `bndlex` command line.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`. The scanner itself is total and never fails.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Example
//!
//! ```
//! let dump = bndlex::format::dump_source("a: b\n").unwrap();
//! assert!(dump.starts_with("HEADER_NAME"));
//! ```

pub mod cli;
pub mod format;
pub mod version;

pub use bndlex_core::lang;
pub use bndlex_syntax::{lexer, relex, token_helpers};

pub use format::{DumpConfig, DumpError, DumpFormat, dump_range, dump_source};
pub use lexer::{LexState, Lexer, Span, Token, TokenKind};
pub use relex::{LexedDocument, RelexError, TextEdit, verify_resumption};
