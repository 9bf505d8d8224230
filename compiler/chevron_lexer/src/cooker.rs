//! Token cooking layer.
//!
//! Turns `(RawTag, offset, len)` triples from the raw scanner into
//! classified [`Token`]s:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → Token
//! ```
//!
//! - **Identifiers**: keyword / literal-word lookup for the language
//! - **Literals**: classified; escapes checked when enabled, never decoded
//! - **Comments**: line, block, or doc
//! - **Operators/delimiters**: operator vs. punctuation, bracket mark on `<`/`>`
//! - **Unterminated literals**: `LexError`

use chevron_lexer_core::{Language, RawTag};

use crate::escape::find_invalid_escape;
use crate::keywords;
use crate::{CommentKind, LexError, LexOptions, LiteralKind, Span, Token, TokenKind};

/// Cooks raw tokens of one source text. Stateless per token.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
    lang: Language,
    options: LexOptions,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str, lang: Language, options: LexOptions) -> Self {
        Self {
            source,
            lang,
            options,
        }
    }

    /// Cook the raw token at `offset..offset + len`.
    pub(crate) fn cook(&self, tag: RawTag, offset: u32, len: u32) -> Result<Token<'src>, LexError> {
        let span = Span::new(offset, offset + len);
        let text = self.source.get(span.range()).unwrap_or("");
        let kind = match tag {
            RawTag::Ident => keywords::lookup(text, self.lang).unwrap_or(TokenKind::Ident),
            RawTag::Int | RawTag::Float | RawTag::HexInt | RawTag::BinInt => TokenKind::Literal,
            RawTag::String | RawTag::TextBlock => {
                self.check_escapes(text, offset)?;
                TokenKind::StringLiteral
            }
            RawTag::VerbatimString | RawTag::RawString => TokenKind::StringLiteral,
            RawTag::Char => {
                self.check_escapes(text, offset)?;
                TokenKind::CharLiteral
            }
            RawTag::LineComment => TokenKind::Comment(self.line_comment_kind(text)),
            RawTag::BlockComment => TokenKind::Comment(block_comment_kind(text)),
            RawTag::Preprocessor => TokenKind::Preprocessor,
            RawTag::Whitespace | RawTag::Newline | RawTag::Bom => TokenKind::Whitespace,

            RawTag::UnterminatedString => return Err(unterminated(offset, LiteralKind::String)),
            RawTag::UnterminatedChar => return Err(unterminated(offset, LiteralKind::Char)),
            RawTag::UnterminatedTextBlock => {
                return Err(unterminated(offset, LiteralKind::TextBlock))
            }
            RawTag::UnterminatedRawString => {
                return Err(unterminated(offset, LiteralKind::RawString))
            }
            RawTag::UnterminatedBlockComment => {
                return Err(unterminated(offset, LiteralKind::BlockComment))
            }

            RawTag::Dot
            | RawTag::Question
            | RawTag::Colon
            | RawTag::ColonColon
            | RawTag::DotDotDot => TokenKind::Punctuation,
            other if other.is_operator() => TokenKind::Operator,
            // Delimiters, stray bytes, interior nulls.
            _ => TokenKind::Punctuation,
        };
        Ok(Token::new(kind, text, span))
    }

    fn check_escapes(&self, text: &str, offset: u32) -> Result<(), LexError> {
        if !self.options.validate_escapes {
            return Ok(());
        }
        match find_invalid_escape(text, self.lang) {
            None => Ok(()),
            Some((at, escape)) => Err(LexError::InvalidEscape {
                offset: offset.saturating_add(u32::try_from(at).unwrap_or(u32::MAX)),
                escape,
            }),
        }
    }

    /// `///` is a doc comment in Java and C#; `////` and beyond are rulers.
    fn line_comment_kind(&self, text: &str) -> CommentKind {
        let doc_dialect = matches!(self.lang, Language::Java | Language::CSharp);
        if doc_dialect && text.starts_with("///") && !text.starts_with("////") {
            CommentKind::Doc
        } else {
            CommentKind::Line
        }
    }
}

/// `/** ... */` is documentation; the empty `/**/` is not.
fn block_comment_kind(text: &str) -> CommentKind {
    if text.starts_with("/**") && text != "/**/" {
        CommentKind::Doc
    } else {
        CommentKind::Block
    }
}

fn unterminated(offset: u32, what: LiteralKind) -> LexError {
    LexError::UnterminatedLiteral { offset, what }
}

#[cfg(test)]
mod tests;
