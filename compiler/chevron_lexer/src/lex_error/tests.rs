use super::*;

#[test]
fn messages_name_the_construct_and_offset() {
    let err = LexError::UnterminatedLiteral {
        offset: 12,
        what: LiteralKind::TextBlock,
    };
    assert_eq!(err.to_string(), "unterminated text block starting at byte 12");
    assert_eq!(err.offset(), 12);

    let err = LexError::InvalidEscape {
        offset: 3,
        escape: "\\q".to_owned(),
    };
    assert_eq!(err.to_string(), "invalid escape sequence `\\q` at byte 3");
    assert_eq!(err.offset(), 3);
}

#[test]
fn literal_kind_display() {
    assert_eq!(LiteralKind::Char.to_string(), "character literal");
    assert_eq!(LiteralKind::BlockComment.to_string(), "block comment");
}
