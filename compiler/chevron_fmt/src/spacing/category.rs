//! Token categories for spacing rule matching.
//!
//! Abstracts a [`Token`] into the handful of shapes the spacing rules care
//! about. Bracket roles are folded in, so a resolved `<` is either a
//! `GenericOpen` or a `RelationalOp`, never just "less than".

use chevron_lexer::{BracketRole, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    // Words
    Ident,
    Keyword,

    // Literals
    /// Number, `true`, `false`, `null`
    Literal,
    String,
    Char,

    // Trivia that is still emitted as a token
    Comment,
    Preprocessor,
    Whitespace,

    // Angle brackets by resolved role
    GenericOpen,
    GenericClose,
    RelationalOp,
    ShiftOp,

    // Punctuation
    Comma,
    /// A comma whose innermost open delimiter is a generic list.
    GenericComma,
    Question,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Dot,
    Semicolon,
    Colon,

    /// Any other operator.
    Operator,
    /// Any other punctuation.
    Punctuation,
}

impl TokenCategory {
    /// Categorize a token. `in_generic` marks commas that sit directly
    /// inside a generic argument list.
    pub fn of(token: &Token<'_>, in_generic: bool) -> Self {
        if let Some(role) = token.role() {
            return match role {
                BracketRole::GenericOpen => TokenCategory::GenericOpen,
                BracketRole::GenericClose => TokenCategory::GenericClose,
                BracketRole::ShiftOp => TokenCategory::ShiftOp,
                BracketRole::RelationalOp | BracketRole::Unresolved => TokenCategory::RelationalOp,
            };
        }
        match token.kind {
            TokenKind::Ident => TokenCategory::Ident,
            TokenKind::Keyword => TokenCategory::Keyword,
            TokenKind::Literal => TokenCategory::Literal,
            TokenKind::StringLiteral => TokenCategory::String,
            TokenKind::CharLiteral => TokenCategory::Char,
            TokenKind::Comment(_) => TokenCategory::Comment,
            TokenKind::Preprocessor => TokenCategory::Preprocessor,
            TokenKind::Whitespace => TokenCategory::Whitespace,
            TokenKind::Operator => TokenCategory::Operator,
            TokenKind::Punctuation => Self::punctuation(token.text, in_generic),
        }
    }

    fn punctuation(text: &str, in_generic: bool) -> Self {
        match text {
            "," if in_generic => TokenCategory::GenericComma,
            "," => TokenCategory::Comma,
            "?" => TokenCategory::Question,
            "(" => TokenCategory::LParen,
            ")" => TokenCategory::RParen,
            "[" => TokenCategory::LBracket,
            "]" => TokenCategory::RBracket,
            "{" => TokenCategory::LBrace,
            "}" => TokenCategory::RBrace,
            "." => TokenCategory::Dot,
            ";" => TokenCategory::Semicolon,
            ":" => TokenCategory::Colon,
            _ => TokenCategory::Punctuation,
        }
    }

    /// `<` or `>` used as an operator rather than a bracket.
    #[inline]
    pub fn is_angle_operator(self) -> bool {
        matches!(self, TokenCategory::RelationalOp | TokenCategory::ShiftOp)
    }

    /// Tokens whose surroundings are never rewritten.
    #[inline]
    pub fn is_opaque(self) -> bool {
        matches!(
            self,
            TokenCategory::Comment | TokenCategory::Preprocessor | TokenCategory::Whitespace
        )
    }
}
