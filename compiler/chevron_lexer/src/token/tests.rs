use super::*;

fn op(text: &str) -> Token<'_> {
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    Token::new(TokenKind::Operator, text, Span::new(0, len))
}

#[test]
fn only_single_angles_are_marked() {
    assert_eq!(op("<").role(), Some(BracketRole::Unresolved));
    assert_eq!(op(">").role(), Some(BracketRole::Unresolved));
    for text in ["<<", "<=", ">=", "->", "=>", "<=>", "<<="] {
        assert_eq!(op(text).bracket, None, "{text}");
    }
}

#[test]
fn angle_inside_string_is_not_marked() {
    let tok = Token::new(TokenKind::StringLiteral, "\"<\"", Span::new(0, 3));
    assert_eq!(tok.bracket, None);
}

#[test]
fn set_role_only_touches_marked_tokens() {
    let mut open = op("<");
    open.set_role(BracketRole::GenericOpen);
    assert!(open.is_open_angle());
    assert_eq!(open.role(), Some(BracketRole::GenericOpen));

    let mut plus = op("+");
    plus.set_role(BracketRole::GenericOpen);
    assert_eq!(plus.role(), None);
}

#[test]
fn is_matches_operators_and_punctuation_only() {
    assert!(op(";").is(";"));
    let ident = Token::new(TokenKind::Ident, "x", Span::new(0, 1));
    assert!(!ident.is("x"));
}

#[test]
fn trivia_kinds() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Comment(CommentKind::Doc).is_trivia());
    assert!(TokenKind::Preprocessor.is_trivia());
    assert!(!TokenKind::Punctuation.is_trivia());
}

#[test]
fn newline_detection() {
    let ws = |text| Token::new(TokenKind::Whitespace, text, Span::default());
    assert!(ws("\n  ").has_newline());
    assert!(ws("\r").has_newline());
    assert!(!ws("   ").has_newline());
}

#[test]
fn role_names() {
    assert!(BracketRole::GenericClose.is_generic());
    assert!(!BracketRole::ShiftOp.is_generic());
    assert_eq!(BracketRole::RelationalOp.name(), "relational");
}

#[test]
fn span_basics() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert_eq!(span.range(), 3..7);
    assert_eq!(span.to_string(), "3..7");
}
