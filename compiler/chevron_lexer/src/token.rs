//! Classified tokens.

use crate::Span;

/// Comment flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// `// ...`
    Line,
    /// `/* ... */`
    Block,
    /// `/** ... */`, or `/// ...` in Java and C#.
    Doc,
}

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Keyword,
    /// Numbers and the literal words `true`, `false`, `null`, `nullptr`.
    Literal,
    /// Every string form: plain, text block, verbatim, interpolated, raw.
    StringLiteral,
    CharLiteral,
    Comment(CommentKind),
    /// Arithmetic, comparison, logical, assignment and arrow operators,
    /// including `<` and `>`.
    Operator,
    /// Delimiters, separators, and any stray byte the scanner did not
    /// recognize.
    Punctuation,
    /// A whole `#` directive line, continuations included.
    Preprocessor,
    /// Spaces, tabs, line breaks and a leading byte order mark.
    Whitespace,
}

impl TokenKind {
    /// Tokens that the disambiguator looks through.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment(_) | TokenKind::Preprocessor
        )
    }

    /// Numbers, strings, chars, and the literal words.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Literal | TokenKind::StringLiteral | TokenKind::CharLiteral
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "ident",
            TokenKind::Keyword => "keyword",
            TokenKind::Literal => "literal",
            TokenKind::StringLiteral => "string",
            TokenKind::CharLiteral => "char",
            TokenKind::Comment(CommentKind::Line) => "line-comment",
            TokenKind::Comment(CommentKind::Block) => "block-comment",
            TokenKind::Comment(CommentKind::Doc) => "doc-comment",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punct",
            TokenKind::Preprocessor => "preproc",
            TokenKind::Whitespace => "whitespace",
        }
    }
}

/// What an angle-bracket token turned out to be.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BracketRole {
    /// Not yet decided; only the tokenizer produces this.
    #[default]
    Unresolved,
    /// `<` opening a generic/template argument list.
    GenericOpen,
    /// `>` closing a generic/template argument list.
    GenericClose,
    /// Less-than or greater-than comparison.
    RelationalOp,
    /// One half of a `>>` / `>>>` shift.
    ShiftOp,
}

impl BracketRole {
    pub fn is_generic(self) -> bool {
        matches!(self, BracketRole::GenericOpen | BracketRole::GenericClose)
    }

    pub fn name(self) -> &'static str {
        match self {
            BracketRole::Unresolved => "unresolved",
            BracketRole::GenericOpen => "generic-open",
            BracketRole::GenericClose => "generic-close",
            BracketRole::RelationalOp => "relational",
            BracketRole::ShiftOp => "shift",
        }
    }
}

/// Role annotation carried by every `<` and `>` token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BracketMark {
    pub role: BracketRole,
}

/// A classified slice of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    /// `Some` exactly when `text` is `<` or `>`.
    pub bracket: Option<BracketMark>,
}

impl<'src> Token<'src> {
    /// Create a token, attaching an unresolved mark to `<` and `>`.
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        let bracket = (kind == TokenKind::Operator && matches!(text, "<" | ">"))
            .then(BracketMark::default);
        Token {
            kind,
            text,
            span,
            bracket,
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Returns `true` for an operator or punctuation token spelled `text`.
    pub fn is(&self, text: &str) -> bool {
        matches!(self.kind, TokenKind::Operator | TokenKind::Punctuation) && self.text == text
    }

    /// Current bracket role, or `None` for tokens other than `<`/`>`.
    pub fn role(&self) -> Option<BracketRole> {
        self.bracket.map(|mark| mark.role)
    }

    pub fn is_open_angle(&self) -> bool {
        self.bracket.is_some() && self.text == "<"
    }

    pub fn is_close_angle(&self) -> bool {
        self.bracket.is_some() && self.text == ">"
    }

    /// Set the bracket role. No effect on tokens without a mark.
    pub fn set_role(&mut self, role: BracketRole) {
        if let Some(mark) = &mut self.bracket {
            mark.role = role;
        }
    }

    /// Whitespace that contains a line break.
    pub fn has_newline(&self) -> bool {
        self.kind == TokenKind::Whitespace && self.text.contains(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests;
