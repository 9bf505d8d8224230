//! Spacing normalization.
//!
//! Re-emits a disambiguated token stream, rewriting only the same-line
//! whitespace between adjacent tokens according to the spacing rules.
//! Token text is copied verbatim, as is any gap containing a line break.

use chevron_lexer::{BracketRole, Token, TokenKind};

use crate::config::SpacingConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::spacing::{lookup_spacing, TokenCategory};

/// Normalize `tokens` into a new string.
pub fn normalize(tokens: &[Token<'_>], config: &SpacingConfig) -> String {
    let capacity = tokens.iter().map(|token| token.text.len()).sum();
    let mut emitter = StringEmitter::with_capacity(capacity);
    normalize_into(tokens, config, &mut emitter);
    emitter.output()
}

/// Normalize `tokens` into an arbitrary emitter.
pub fn normalize_into<E: Emitter>(tokens: &[Token<'_>], config: &SpacingConfig, out: &mut E) {
    let mut state = Normalizer {
        config,
        delims: Vec::new(),
        enabled: true,
    };

    let mut left: Option<TokenCategory> = None;
    let mut gap: Option<&str> = None;

    for token in tokens {
        if token.kind == TokenKind::Whitespace {
            gap = Some(token.text);
            continue;
        }

        let right = TokenCategory::of(token, state.in_generic());
        let source_gap = gap.take().unwrap_or_default();
        match left {
            Some(left) if state.rewrites(source_gap) => {
                let action = config.action(lookup_spacing(left, right));
                out.emit(action.apply(source_gap));
            }
            _ => out.emit(source_gap),
        }

        out.emit(token.text);
        state.track(token);
        left = Some(TokenCategory::of(token, state.in_generic()));
    }

    if let Some(trailing) = gap {
        out.emit(trailing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Delim {
    Generic,
    Paren,
    Bracket,
    Brace,
}

struct Normalizer<'cfg> {
    config: &'cfg SpacingConfig,
    /// Open delimiters, innermost last.
    delims: Vec<Delim>,
    /// Cleared between the disable and enable markers.
    enabled: bool,
}

impl Normalizer<'_> {
    fn in_generic(&self) -> bool {
        self.delims.last() == Some(&Delim::Generic)
    }

    fn rewrites(&self, gap: &str) -> bool {
        self.enabled && !gap.contains(['\n', '\r'])
    }

    fn track(&mut self, token: &Token<'_>) {
        match token.role() {
            Some(BracketRole::GenericOpen) => self.delims.push(Delim::Generic),
            Some(BracketRole::GenericClose) => self.close(Delim::Generic),
            Some(_) => {}
            None => match token.kind {
                TokenKind::Punctuation => match token.text {
                    "(" => self.delims.push(Delim::Paren),
                    ")" => self.close(Delim::Paren),
                    "[" => self.delims.push(Delim::Bracket),
                    "]" => self.close(Delim::Bracket),
                    "{" => self.delims.push(Delim::Brace),
                    "}" => self.close(Delim::Brace),
                    _ => {}
                },
                TokenKind::Comment(_) => self.toggle(token.text),
                _ => {}
            },
        }
    }

    /// Pop back to the innermost `delim`. A stray closer is ignored.
    fn close(&mut self, delim: Delim) {
        if let Some(pos) = self.delims.iter().rposition(|open| *open == delim) {
            self.delims.truncate(pos);
        }
    }

    fn toggle(&mut self, comment: &str) {
        if comment.contains(self.config.disable_processing_cmt.as_str()) {
            self.enabled = false;
        } else if comment.contains(self.config.enable_processing_cmt.as_str()) {
            self.enabled = true;
        }
    }
}
