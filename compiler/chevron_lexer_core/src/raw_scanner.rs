//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values. It does not resolve keywords, validate escapes, or
//! decide what `<` and `>` mean; those are left to the cooking layer and the
//! disambiguator.
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns the token. The sentinel byte
//! (`0x00`) dispatches to `eof()`, which also handles interior nulls.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};
use crate::Language;

/// Longest C++ raw string delimiter (`R"delim(`).
const MAX_RAW_DELIMITER: usize = 16;

/// C++ literal prefixes, longest first so `u8R` wins over `u8` and `u`.
static CPP_PREFIXES: [&[u8]; 9] = [b"u8R", b"uR", b"UR", b"LR", b"R", b"u8", b"u", b"U", b"L"];

/// Scanner over one source buffer in one language dialect.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
/// The scanner is `Clone`, so a partially consumed scan can be forked.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    lang: Language,
    /// No significant byte seen since the last line break. `#` only starts
    /// a directive here.
    at_line_start: bool,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>, lang: Language) -> Self {
        Self {
            cursor,
            lang,
            at_line_start: true,
        }
    }

    /// Language dialect being scanned.
    pub fn language(&self) -> Language {
        self.lang
    }

    /// Byte offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted,
    /// and keeps returning it on subsequent calls.
    pub fn next_token(&mut self) -> RawToken {
        let tok = self.dispatch();
        match tok.tag {
            RawTag::Newline => self.at_line_start = true,
            RawTag::Whitespace | RawTag::Bom | RawTag::Eof => {}
            _ => self.at_line_start = false,
        }
        tok
    }

    fn dispatch(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.single(start, RawTag::Newline),
            0xEF if start == 0 && self.cursor.starts_with(b"\xEF\xBB\xBF") => {
                self.cursor.advance_n(3);
                self.emit(RawTag::Bom, start)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | 0x80..=0xFF => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.double_quote(start),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'/' => self.slash_or_comment(start),
            b'#' => self.hash(start),
            b'$' => self.dollar(start),
            b'@' => self.at(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_equal(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'&' => self.doubled(
                start,
                b'&',
                RawTag::Ampersand,
                RawTag::AmpersandAmpersand,
                RawTag::AmpersandEqual,
            ),
            b'|' => self.doubled(start, b'|', RawTag::Pipe, RawTag::PipePipe, RawTag::PipeEqual),
            b'~' => self.single(start, RawTag::Tilde),
            b'=' => self.equal(start),
            b'<' => self.less(start),
            b'.' => self.dot(start),
            b'?' => self.question(start),
            b':' => self.colon(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'\\' => self.single(start, RawTag::Backslash),
            b'`' => self.single(start, RawTag::Backtick),
            1..=8 | 14..=31 | 127 => self.single(start, RawTag::InvalidByte),
        }
    }

    #[inline]
    fn emit(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.emit(tag, start)
    }

    // ─── EOF ────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.single(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ──────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.emit(RawTag::Whitespace, start)
    }

    /// `\r\n` is one newline; a lone `\r` is a line break too.
    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        self.emit(RawTag::Newline, start)
    }

    // ─── Comments & Directives ──────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.emit(RawTag::LineComment, start)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_past(b"*/") {
                    self.emit(RawTag::BlockComment, start)
                } else {
                    self.emit(RawTag::UnterminatedBlockComment, start)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.emit(RawTag::SlashEqual, start)
            }
            _ => self.emit(RawTag::Slash, start),
        }
    }

    fn hash(&mut self, start: u32) -> RawToken {
        if !(self.at_line_start && self.lang.has_preprocessor()) {
            return self.single(start, RawTag::Hash);
        }
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() || !self.line_continues() {
                break;
            }
            self.cursor.advance(); // consume '\n', directive continues
        }
        self.emit(RawTag::Preprocessor, start)
    }

    /// Whether the line ending at the cursor (sitting on `\n`) ends with `\`.
    fn line_continues(&self) -> bool {
        let mut end = self.cursor.pos();
        if end > 0 && self.cursor.byte_at(end - 1) == b'\r' {
            end -= 1;
        }
        end > 0 && self.cursor.byte_at(end - 1) == b'\\'
    }

    // ─── Identifiers ────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        if self.lang.has_raw_strings() {
            if let Some(tok) = self.cpp_prefixed_literal(start) {
                return tok;
            }
        }
        self.cursor.advance_char();
        self.eat_ident_continue();
        self.emit(RawTag::Ident, start)
    }

    fn eat_ident_continue(&mut self) {
        let dollar = self.lang.dollar_in_identifiers();
        self.cursor
            .eat_while(|b| is_ident_continue(b) || (dollar && b == b'$'));
    }

    /// `u8"..."`, `L'x'`, `R"(...)"` and friends.
    fn cpp_prefixed_literal(&mut self, start: u32) -> Option<RawToken> {
        let rest = self.cursor.remaining();
        let prefix = CPP_PREFIXES.iter().find(|prefix| {
            let quote = rest.get(prefix.len()).copied();
            rest.starts_with(prefix)
                && (quote == Some(b'"') || (quote == Some(b'\'') && !prefix.ends_with(b"R")))
        })?;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "prefixes are at most three bytes"
        )]
        self.cursor.advance_n(prefix.len() as u32);
        Some(if prefix.ends_with(b"R") {
            self.raw_string(start)
        } else if self.cursor.current() == b'"' {
            self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString)
        } else {
            self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar)
        })
    }

    /// C++ raw string; the cursor sits on the opening `"`.
    ///
    /// A malformed delimiter (too long, or containing spaces, parens or
    /// backslashes) falls back to an ordinary string.
    fn raw_string(&mut self, start: u32) -> RawToken {
        let body = self.cursor.remaining().get(1..).unwrap_or(&[]);
        let delimiter = body
            .iter()
            .take(MAX_RAW_DELIMITER + 1)
            .position(|&b| b == b'(' || matches!(b, b' ' | b')' | b'\\' | b'\t' | b'\n' | b'"'))
            .filter(|&n| body.get(n) == Some(&b'('));
        let Some(delim_len) = delimiter else {
            return self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString);
        };

        let mut closing = Vec::with_capacity(delim_len + 2);
        closing.push(b')');
        closing.extend_from_slice(&body[..delim_len]);
        closing.push(b'"');

        #[allow(
            clippy::cast_possible_truncation,
            reason = "delimiter length is bounded by MAX_RAW_DELIMITER"
        )]
        self.cursor.advance_n(delim_len as u32 + 2); // `"delim(`
        if self.cursor.eat_past(&closing) {
            self.eat_literal_suffix();
            self.emit(RawTag::RawString, start)
        } else {
            self.emit(RawTag::UnterminatedRawString, start)
        }
    }

    // ─── Numeric Literals ───────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            self.cursor.advance();
            self.eat_digits(|b| b.is_ascii_hexdigit());
            self.eat_literal_suffix();
            return self.emit(RawTag::HexInt, start);
        }

        if first == b'0'
            && matches!(self.cursor.current(), b'b' | b'B')
            && matches!(self.cursor.peek(), b'0' | b'1')
        {
            self.cursor.advance();
            self.eat_digits(|b| b == b'0' || b == b'1');
            self.eat_literal_suffix();
            return self.emit(RawTag::BinInt, start);
        }

        let mut is_float = first == b'.';
        self.eat_digits(|b| b.is_ascii_digit());

        if !is_float && self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits(|b| b.is_ascii_digit());
            is_float = true;
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let sign = usize::from(matches!(self.cursor.peek(), b'+' | b'-'));
            if self.cursor.remaining().get(1 + sign).is_some_and(u8::is_ascii_digit) {
                #[allow(clippy::cast_possible_truncation, reason = "sign is 0 or 1")]
                self.cursor.advance_n(1 + sign as u32);
                self.eat_digits(|b| b.is_ascii_digit());
                is_float = true;
            }
        }

        self.eat_literal_suffix();
        self.emit(if is_float { RawTag::Float } else { RawTag::Int }, start)
    }

    /// Digits plus separators: `_` everywhere, `'` between C++ digits.
    fn eat_digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        let quote_sep = self.lang.has_quote_digit_separators();
        loop {
            let b = self.cursor.current();
            if is_digit(b) || b == b'_' {
                self.cursor.advance();
            } else if quote_sep && b == b'\'' && is_digit(self.cursor.peek()) {
                self.cursor.advance_n(2);
            } else {
                break;
            }
        }
    }

    /// Type suffixes (`L`, `f`, `ul`) and C++ user-defined literal suffixes.
    fn eat_literal_suffix(&mut self) {
        self.eat_ident_continue();
    }

    // ─── String & Char Literals ─────────────────────────────────

    fn double_quote(&mut self, start: u32) -> RawToken {
        if self.lang.has_text_blocks() && self.cursor.starts_with(b"\"\"\"") {
            return self.text_block(start);
        }
        self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString)
    }

    /// `quote ... quote` with backslash escapes; the cursor sits on the
    /// opening quote. Line breaks do not end the literal.
    fn quoted(&mut self, start: u32, quote: u8, tag: RawTag, unterminated: RawTag) -> RawToken {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                0 => return self.emit(unterminated, start),
                _ => {
                    self.cursor.advance(); // closing quote
                    if self.lang.has_raw_strings() {
                        self.eat_literal_suffix();
                    }
                    return self.emit(tag, start);
                }
            }
        }
    }

    fn text_block(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(3);
        loop {
            match self.cursor.skip_to_string_delim(b'"') {
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                0 => return self.emit(RawTag::UnterminatedTextBlock, start),
                _ if self.cursor.starts_with(b"\"\"\"") => {
                    self.cursor.advance_n(3);
                    // `""""` closes on the last three quotes.
                    self.cursor.eat_while(|b| b == b'"');
                    return self.emit(RawTag::TextBlock, start);
                }
                _ => self.cursor.advance(),
            }
        }
    }

    fn dollar(&mut self, start: u32) -> RawToken {
        if self.lang.has_verbatim_strings() {
            if self.cursor.peek() == b'"' {
                self.cursor.advance();
                return self.interpolated(start, false);
            }
            if self.cursor.peek() == b'@' && self.cursor.peek2() == b'"' {
                self.cursor.advance_n(2);
                return self.interpolated(start, true);
            }
        }
        if self.lang.dollar_in_identifiers() {
            return self.identifier(start);
        }
        self.single(start, RawTag::Dollar)
    }

    fn at(&mut self, start: u32) -> RawToken {
        if self.lang.has_verbatim_strings() {
            if self.cursor.peek() == b'"' {
                self.cursor.advance();
                return self.verbatim(start);
            }
            if self.cursor.peek() == b'$' && self.cursor.peek2() == b'"' {
                self.cursor.advance_n(2);
                return self.interpolated(start, true);
            }
        }
        self.single(start, RawTag::At)
    }

    /// C# `@"..."`: no escapes except a doubled `""`.
    fn verbatim(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening quote
        loop {
            if !self.cursor.eat_past(b"\"") {
                return self.emit(RawTag::UnterminatedString, start);
            }
            if self.cursor.current() == b'"' {
                self.cursor.advance();
            } else {
                return self.emit(RawTag::VerbatimString, start);
            }
        }
    }

    /// C# `$"..."` / `$@"..."`; the cursor sits on the opening quote.
    ///
    /// Holes (`{expr}`) may contain nested string and char literals, whose
    /// quotes do not end the outer string.
    fn interpolated(&mut self, start: u32, verbatim: bool) -> RawToken {
        let (tag, unterminated) = if verbatim {
            (RawTag::VerbatimString, RawTag::UnterminatedString)
        } else {
            (RawTag::String, RawTag::UnterminatedString)
        };
        self.cursor.advance(); // opening quote
        let mut holes = 0u32;
        loop {
            if self.cursor.is_eof() {
                return self.emit(unterminated, start);
            }
            let b = self.cursor.current();
            match (holes, b) {
                (0, b'"') if verbatim && self.cursor.peek() == b'"' => self.cursor.advance_n(2),
                (0, b'"') => {
                    self.cursor.advance();
                    return self.emit(tag, start);
                }
                (0, b'\\') if !verbatim => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                (0, b'{') if self.cursor.peek() == b'{' => self.cursor.advance_n(2),
                (0, b'}') if self.cursor.peek() == b'}' => self.cursor.advance_n(2),
                (_, b'{') => {
                    holes += 1;
                    self.cursor.advance();
                }
                (_, b'}') => {
                    holes = holes.saturating_sub(1);
                    self.cursor.advance();
                }
                (depth, b'"' | b'\'') if depth > 0 => {
                    let nested = self.cursor.pos();
                    let (t, u) = if b == b'"' {
                        (RawTag::String, RawTag::UnterminatedString)
                    } else {
                        (RawTag::Char, RawTag::UnterminatedChar)
                    };
                    if self.quoted(nested, b, t, u).tag == u {
                        return self.emit(unterminated, start);
                    }
                }
                _ => self.cursor.advance_char(),
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────

    /// `op` or `op=`.
    fn with_equal(&mut self, start: u32, plain: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.emit(assign, start)
        } else {
            self.emit(plain, start)
        }
    }

    /// `op`, `opop`, or `op=`.
    fn doubled(
        &mut self,
        start: u32,
        byte: u8,
        plain: RawTag,
        double: RawTag,
        assign: RawTag,
    ) -> RawToken {
        if self.cursor.peek() == byte {
            self.cursor.advance_n(2);
            return self.emit(double, start);
        }
        self.with_equal(start, plain, assign)
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.doubled(start, b'+', RawTag::Plus, RawTag::PlusPlus, RawTag::PlusEqual)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'>' {
            self.cursor.advance_n(2);
            return self.emit(RawTag::Arrow, start);
        }
        self.doubled(
            start,
            b'-',
            RawTag::Minus,
            RawTag::MinusMinus,
            RawTag::MinusEqual,
        )
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        match self.cursor.current() {
            b'=' => self.single(start, RawTag::EqualEqual),
            b'>' => self.single(start, RawTag::FatArrow),
            _ => self.emit(RawTag::Equal, start),
        }
    }

    /// `<`, `<=`, `<=>`, `<<`, `<<=`.
    fn less(&mut self, start: u32) -> RawToken {
        let tag = match (self.cursor.peek(), self.cursor.peek2()) {
            (b'<', b'=') => RawTag::ShlEqual,
            (b'<', _) => RawTag::Shl,
            (b'=', b'>') => RawTag::Spaceship,
            (b'=', _) => RawTag::LessEqual,
            _ => RawTag::Less,
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "lexemes are at most three bytes"
        )]
        let len = tag.lexeme().map_or(1, str::len) as u32;
        self.cursor.advance_n(len);
        self.emit(tag, start)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            return self.number(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.emit(RawTag::DotDotDot, start);
        }
        self.single(start, RawTag::Dot)
    }

    fn question(&mut self, start: u32) -> RawToken {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'?', b'=') => {
                self.cursor.advance_n(3);
                self.emit(RawTag::QuestionQuestionEqual, start)
            }
            (b'?', _) => {
                self.cursor.advance_n(2);
                self.emit(RawTag::QuestionQuestion, start)
            }
            // `cond ?.5 : x` is a conditional, not a null-safe access.
            (b'.', next) if !next.is_ascii_digit() => {
                self.cursor.advance_n(2);
                self.emit(RawTag::QuestionDot, start)
            }
            _ => self.single(start, RawTag::Question),
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b':' {
            self.cursor.advance_n(2);
            return self.emit(RawTag::ColonColon, start);
        }
        self.single(start, RawTag::Colon)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes: ASCII letters,
/// digits, `_`, and every non-ASCII byte. `$` is dialect-dependent and
/// handled by the caller. The sentinel (`0x00`) maps to `false`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | 0x80..=0xFF
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan a whole source string and collect its raw tokens (without `Eof`).
///
/// For streaming access, construct a `SourceBuffer` and `RawScanner`
/// directly.
pub fn tokenize(source: &str, lang: Language) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor(), lang).collect()
}
