use crate::SourceBuffer;

// Navigation

#[test]
fn starts_on_first_byte() {
    let buf = SourceBuffer::new("Map<K>");
    assert_eq!(buf.cursor().current(), b'M');
}

#[test]
fn advance_walks_to_the_sentinel() {
    let buf = SourceBuffer::new("<T>");
    let mut walker = buf.cursor();
    walker.advance();
    assert_eq!((walker.current(), walker.pos()), (b'T', 1));
    walker.advance_n(2);
    assert!(walker.is_eof());
    assert_eq!(walker.current(), 0);
}

#[test]
fn lookahead_past_end_reads_sentinel() {
    let buf = SourceBuffer::new(">>");
    let mut walker = buf.cursor();
    assert_eq!((walker.peek(), walker.peek2()), (b'>', 0));
    walker.advance();
    assert_eq!(walker.peek(), 0);
}

#[test]
fn byte_at_past_buffer_is_zero() {
    let buf = SourceBuffer::new("a");
    let cursor = buf.cursor();
    assert_eq!(cursor.byte_at(0), b'a');
    assert_eq!(cursor.byte_at(10_000), 0);
}

// End of input

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn embedded_nul_does_not_end_input() {
    let buf = SourceBuffer::new("x\0y");
    let mut walker = buf.cursor();
    walker.advance();
    assert!(walker.current() == 0 && !walker.is_eof());
    walker.advance();
    assert_eq!(walker.current(), b'y');
}

// Lookahead

#[test]
fn remaining_and_starts_with() {
    let buf = SourceBuffer::new("R\"x(a)x\"");
    let mut cursor = buf.cursor();
    assert!(cursor.starts_with(b"R\""));
    cursor.advance_n(2);
    assert_eq!(cursor.remaining(), b"x(a)x\"");
    assert!(!cursor.starts_with(b"y"));
}

#[test]
fn copies_are_independent() {
    let buf = SourceBuffer::new("a<b");
    let mut walker = buf.cursor();
    let mark = walker;
    walker.advance_n(2);
    assert_eq!((mark.pos(), walker.pos()), (0, 2));
}

// === Skips ===

#[test]
fn eat_while_stops_at_predicate() {
    let buf = SourceBuffer::new("abc123");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_whitespace_includes_form_feed() {
    let buf = SourceBuffer::new(" \t\x0C\x0Bx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline() {
    let buf = SourceBuffer::new("// c\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 4);

    let buf = SourceBuffer::new("// c");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_crosses_lines() {
    let buf = SourceBuffer::new("ab\ncd\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 5);
}

#[test]
fn skip_to_string_delim_stops_at_backslash() {
    let buf = SourceBuffer::new("a\\'b'");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'\''), b'\\');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn skip_to_string_delim_hits_eof() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(b'"'), 0);
    assert!(cursor.is_eof());
}

#[test]
fn eat_past_needle() {
    let buf = SourceBuffer::new("/* a */ b");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_past(b"*/"));
    assert_eq!(cursor.pos(), 7);
    assert!(!cursor.eat_past(b"*/"));
    assert!(cursor.is_eof());
}

// === UTF-8 ===

#[test]
fn utf8_char_widths() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
}

#[test]
fn advance_char_skips_full_code_point() {
    let buf = SourceBuffer::new("\u{1F600}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.current(), b'x');
}
