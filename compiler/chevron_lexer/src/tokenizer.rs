//! Streaming tokenizer.

use std::iter::FusedIterator;

use chevron_lexer_core::{Language, RawScanner, RawTag, RawToken, SourceBuffer};
use tracing::debug;

use crate::cooker::TokenCooker;
use crate::{LexError, Token};

/// Tokenizer switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Reject escape sequences the language does not define. Off by
    /// default; literal contents are copied through untouched.
    pub validate_escapes: bool,
}

/// Lazy iterator of tokens over a [`SourceBuffer`].
///
/// Adjacent spaces, tabs and line breaks are merged into a single
/// `Whitespace` token. After the first error the iterator is exhausted.
/// Cloning the tokenizer forks the scan at its current position.
#[derive(Clone, Debug)]
pub struct Tokenizer<'buf, 'src> {
    scanner: RawScanner<'buf>,
    cooker: TokenCooker<'src>,
    /// Offset of the next token.
    pos: u32,
    /// Raw token read past the end of a whitespace run.
    pending: Option<RawToken>,
    done: bool,
}

impl<'buf, 'src> Tokenizer<'buf, 'src> {
    pub fn new(buf: &'buf SourceBuffer<'src>, lang: Language, options: LexOptions) -> Self {
        Tokenizer {
            scanner: RawScanner::new(buf.cursor(), lang),
            cooker: TokenCooker::new(buf.as_str(), lang, options),
            pos: 0,
            pending: None,
            done: false,
        }
    }

    fn next_raw(&mut self) -> RawToken {
        match self.pending.take() {
            Some(raw) => raw,
            None => self.scanner.next_token(),
        }
    }
}

fn is_space(tag: RawTag) -> bool {
    matches!(tag, RawTag::Whitespace | RawTag::Newline | RawTag::Bom)
}

impl<'src> Iterator for Tokenizer<'_, 'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let raw = self.next_raw();
        if raw.tag == RawTag::Eof {
            self.done = true;
            return None;
        }

        let mut len = raw.len;
        if is_space(raw.tag) {
            loop {
                let next = self.scanner.next_token();
                if is_space(next.tag) {
                    len += next.len;
                } else {
                    self.pending = Some(next);
                    break;
                }
            }
        }

        let start = self.pos;
        self.pos += len;
        let result = self.cooker.cook(raw.tag, start, len);
        if let Err(err) = &result {
            debug!(%err, "tokenizer stopped");
            self.done = true;
        }
        Some(result)
    }
}

impl FusedIterator for Tokenizer<'_, '_> {}

/// Tokenize a whole source text, stopping at the first error.
#[tracing::instrument(level = "trace", skip(source), fields(bytes = source.len()))]
pub fn tokenize(
    source: &str,
    lang: Language,
    options: LexOptions,
) -> Result<Vec<Token<'_>>, LexError> {
    let buf = SourceBuffer::new(source);
    Tokenizer::new(&buf, lang, options).collect()
}
