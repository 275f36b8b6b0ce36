//! Special-character vocabulary.
//!
//! This module defines the fixed set of punctuation characters that are tokenized one character at a time inside
//! header values: delimiters, separators, and a couple of structural markers.
//!
//! ## Notes
//! - Lookup via [`from_char`] / [`from_byte`] is an exhaustive `match`; no allocation, no hashing.
//! - `:` is both the header separator and a value-context special character. Both uses map to
//!   [`PunctuationId::Colon`].
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use bndlex_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('['), Some(PunctuationId::LBracket));
//! assert_eq!(punctuation::name(PunctuationId::LBracket), "OPEN_BRACKET");
//! assert!(punctuation::from_char('a').is_none());
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses and brackets.
    Delimiter,
    /// Separators like `,`, `;`, `:` and `=`.
    Separator,
    /// Markers like `"` and `\`.
    Marker,
}

/// Stable identifier for special-character tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PunctuationId {
    // Delimiters
    LParen,
    RParen,

    // Separators
    Comma,
    Colon,
    Semicolon,
    Equals,

    // Delimiters
    LBracket,
    RBracket,

    // Markers
    Quote,
    Backslash,
}

/// Metadata for a special character.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    /// Upper-case catalog name, as shown in token dumps.
    pub name: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all special characters.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '(', "OPEN_PAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ')', "CLOSE_PAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::Comma, ',', "COMMA", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ':', "COLON", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ';', "SEMICOLON", PunctuationCategory::Separator),
    info(PunctuationId::Equals, '=', "EQUALS", PunctuationCategory::Separator),
    info(PunctuationId::LBracket, '[', "OPEN_BRACKET", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, ']', "CLOSE_BRACKET", PunctuationCategory::Delimiter),
    info(PunctuationId::Quote, '"', "QUOTE", PunctuationCategory::Marker),
    info(PunctuationId::Backslash, '\\', "BACKSLASH", PunctuationCategory::Marker),
];

/// Resolve a character to its special-character identifier.
pub const fn from_char(c: char) -> Option<PunctuationId> {
    match c {
        '(' => Some(PunctuationId::LParen),
        ')' => Some(PunctuationId::RParen),
        ',' => Some(PunctuationId::Comma),
        ':' => Some(PunctuationId::Colon),
        ';' => Some(PunctuationId::Semicolon),
        '=' => Some(PunctuationId::Equals),
        '[' => Some(PunctuationId::LBracket),
        ']' => Some(PunctuationId::RBracket),
        '"' => Some(PunctuationId::Quote),
        '\\' => Some(PunctuationId::Backslash),
        _ => None,
    }
}

/// Resolve a single byte to its special-character identifier.
///
/// Non-ASCII bytes never resolve, so a scanner working on UTF-8 bytes can use this directly.
pub const fn from_byte(b: u8) -> Option<PunctuationId> {
    if b.is_ascii() { from_char(b as char) } else { None }
}

/// Return `true` if `b` is one of the special characters.
#[inline]
pub const fn is_special_byte(b: u8) -> bool {
    from_byte(b).is_some()
}

/// Return the canonical character for a special-character token.
pub const fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Return the catalog name for a special-character token.
pub const fn name(id: PunctuationId) -> &'static str {
    info_for(id).name
}

/// Return the category for a special-character token.
pub const fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a special-character token.
///
/// `PUNCTUATION` is ordered by `PunctuationId` discriminant, so this is a direct index.
pub const fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

const fn info(id: PunctuationId, canonical: char, name: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        name,
        category,
    }
}
