//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte. EOF is the sentinel (`0x00`) at a
//! position at or beyond the source length; a `0x00` before that point is
//! an interior null and is scanned like any other stray byte.
//!
//! Long skips (comment bodies, string bodies) go through `memchr` instead of
//! the byte loop.

/// `Copy` cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// Copying the cursor snapshots its position, which the scanner uses for
/// speculative lookahead (raw string delimiters, C# verbatim prefixes).
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// `buf[source_len]` must be the `0x00` sentinel, followed only by zero
    /// padding. `SourceBuffer::new()` guarantees this.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte at an absolute offset; `0x00` for anything past the buffer.
    #[inline]
    pub fn byte_at(&self, pos: u32) -> u8 {
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    ///
    /// Interior null bytes (`0x00` before `source_len`) are not EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Unscanned source bytes from the current position.
    pub fn remaining(&self) -> &'a [u8] {
        let end = self.source_len as usize;
        self.buf.get(self.pos as usize..end).unwrap_or(&[])
    }

    /// Returns `true` if the unscanned source starts with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel ends the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance past horizontal whitespace: space, tab, vertical tab, form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0B | 0x0C));
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.advance_by_offset(offset),
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the next `quote` or `\` byte and return it, or return
    /// `0x00` with the cursor at EOF.
    ///
    /// Line breaks are ordinary string content here; string literals in
    /// the supported languages are allowed to reach the next line.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        match memchr::memchr2(quote, b'\\', self.remaining()) {
            Some(offset) => {
                self.advance_by_offset(offset);
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `false` and leaves the cursor at EOF when `needle` does not
    /// occur in the rest of the source.
    pub fn eat_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.remaining(), needle) {
            Some(offset) => {
                self.advance_by_offset(offset + needle.len());
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets come from remaining(), whose length fits in u32"
    )]
    fn advance_by_offset(&mut self, offset: usize) {
        self.pos += offset as u32;
    }
}

#[cfg(test)]
mod tests;
