use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("List<T>");
    assert_eq!(buf.len(), 7);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"List<T>");
    assert_eq!(buf.as_str(), "List<T>");
    assert_eq!(buf.as_sentinel_bytes()[7], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "Map<Größe, \u{1F600}>";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

// === Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.as_sentinel_bytes().len() % CACHE_LINE,
            0,
            "buffer not aligned for source length {len}"
        );
        assert!(buf.as_sentinel_bytes().len() > len);
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.as_sentinel_bytes()[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === BOM ===

#[test]
fn detects_utf8_bom() {
    assert!(SourceBuffer::new("\u{FEFF}class A {}").has_utf8_bom());
    assert!(!SourceBuffer::new("class A {}").has_utf8_bom());
    assert!(!SourceBuffer::new("").has_utf8_bom());
}

// === Slicing ===

#[test]
fn slice_borrows_original_text() {
    let source = String::from("List<String> names;");
    let buf = SourceBuffer::new(&source);
    let name: &str = buf.slice(5, 11);
    assert_eq!(name, "String");
    assert_eq!(buf.slice(0, 0), "");
}

#[test]
fn slice_out_of_range_is_empty() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.slice(2, 10), "");
    assert_eq!(buf.slice(3, 1), "");
}

#[test]
fn slice_inside_char_is_empty() {
    let buf = SourceBuffer::new("ä");
    assert_eq!(buf.slice(0, 1), "");
    assert_eq!(buf.slice(0, 2), "ä");
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}
