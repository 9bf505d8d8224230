//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer keeps a `0x00` sentinel byte after the source content so the
//! scanner can detect EOF without explicit length checks. The allocation is
//! rounded up to the next 64-byte boundary, which also gives `peek()` and
//! `peek2()` safe padding near the end of the buffer.
//!
//! Unlike the scanner's output, the buffer still remembers the original
//! `&str`; token text is sliced from it so no byte is ever re-validated.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Sentinel-terminated copy of a source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'src> {
    /// The original text; token slices borrow from here.
    text: &'src str,
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'src> SourceBuffer<'src> {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to the first
    /// `u32::MAX` bytes' worth of length; the driver rejects such files
    /// before they reach the scanner.
    pub fn new(text: &'src str) -> Self {
        let source_bytes = text.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            text,
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// The original source text.
    pub fn as_str(&self) -> &'src str {
        self.text
    }

    /// Source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Returns `true` if the source starts with a UTF-8 byte order mark.
    pub fn has_utf8_bom(&self) -> bool {
        self.as_bytes().starts_with(UTF8_BOM)
    }

    /// Slice the original text by byte range.
    ///
    /// Returns `""` if the range is out of bounds or splits a character,
    /// which the scanner never produces.
    pub fn slice(&self, start: u32, end: u32) -> &'src str {
        self.text.get(start as usize..end as usize).unwrap_or("")
    }
}

#[cfg(test)]
mod tests;
