//! Lossless tokenizer for Java-family source text.
//!
//! Cooks the `(RawTag, len)` stream of `chevron_lexer_core` into classified
//! [`Token`]s that borrow their text from the source. Concatenating the text
//! of every token reproduces the input byte-for-byte.
//!
//! Every `<` and `>` token carries an unresolved [`BracketMark`]; deciding
//! whether it delimits a generic argument list is left to the
//! disambiguator in `chevron_fmt`.

mod cooker;
mod escape;
mod keywords;
mod lex_error;
mod span;
mod token;
mod tokenizer;

pub use chevron_lexer_core::Language;
pub use lex_error::{LexError, LiteralKind};
pub use span::Span;
pub use token::{BracketMark, BracketRole, CommentKind, Token, TokenKind};
pub use tokenizer::{tokenize, LexOptions, Tokenizer};
