//! Tokenizer errors.
//!
//! Only two things stop the tokenizer: a literal or comment that runs off
//! the end of the input, and (when escape validation is enabled) an escape
//! sequence the language does not define. Stray bytes never fail; they
//! become punctuation tokens.

use std::fmt;

use thiserror::Error;

/// Which construct was left open at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Char,
    TextBlock,
    RawString,
    BlockComment,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string literal",
            LiteralKind::Char => "character literal",
            LiteralKind::TextBlock => "text block",
            LiteralKind::RawString => "raw string literal",
            LiteralKind::BlockComment => "block comment",
        })
    }
}

/// Error produced while tokenizing.
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexError {
    /// `offset` is the first byte of the literal.
    #[error("unterminated {what} starting at byte {offset}")]
    UnterminatedLiteral { offset: u32, what: LiteralKind },
    /// `offset` is the position of the backslash.
    #[error("invalid escape sequence `{escape}` at byte {offset}")]
    InvalidEscape { offset: u32, escape: String },
}

impl LexError {
    /// Byte offset the error points at.
    pub fn offset(&self) -> u32 {
        match self {
            LexError::UnterminatedLiteral { offset, .. } | LexError::InvalidEscape { offset, .. } => {
                *offset
            }
        }
    }
}

#[cfg(test)]
mod tests;
