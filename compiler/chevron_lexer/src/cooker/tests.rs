use super::*;
use pretty_assertions::assert_eq;

fn cook(source: &str, tag: RawTag, lang: Language) -> Result<Token<'_>, LexError> {
    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    TokenCooker::new(source, lang, LexOptions::default()).cook(tag, 0, len)
}

fn kind(source: &str, tag: RawTag) -> TokenKind {
    match cook(source, tag, Language::Java) {
        Ok(tok) => tok.kind,
        Err(err) => panic!("unexpected error {err}"),
    }
}

#[test]
fn identifiers_and_keywords() {
    assert_eq!(kind("List", RawTag::Ident), TokenKind::Ident);
    assert_eq!(kind("extends", RawTag::Ident), TokenKind::Keyword);
    assert_eq!(kind("null", RawTag::Ident), TokenKind::Literal);
}

#[test]
fn literals() {
    assert_eq!(kind("0x1F", RawTag::HexInt), TokenKind::Literal);
    assert_eq!(kind("\"s\"", RawTag::String), TokenKind::StringLiteral);
    assert_eq!(kind("'c'", RawTag::Char), TokenKind::CharLiteral);
}

#[test]
fn comment_kinds() {
    assert_eq!(kind("// x", RawTag::LineComment), TokenKind::Comment(CommentKind::Line));
    assert_eq!(kind("/// x", RawTag::LineComment), TokenKind::Comment(CommentKind::Doc));
    assert_eq!(kind("//// x", RawTag::LineComment), TokenKind::Comment(CommentKind::Line));
    assert_eq!(kind("/** x */", RawTag::BlockComment), TokenKind::Comment(CommentKind::Doc));
    assert_eq!(kind("/**/", RawTag::BlockComment), TokenKind::Comment(CommentKind::Block));
    assert_eq!(kind("/* x */", RawTag::BlockComment), TokenKind::Comment(CommentKind::Block));
}

#[test]
fn triple_slash_is_plain_in_cpp() {
    let tok = cook("/// x", RawTag::LineComment, Language::Cpp);
    assert_eq!(tok.map(|t| t.kind), Ok(TokenKind::Comment(CommentKind::Line)));
}

#[test]
fn operators_and_punctuation() {
    assert_eq!(kind("<", RawTag::Less), TokenKind::Operator);
    assert_eq!(kind(">=", RawTag::GreaterEqual), TokenKind::Operator);
    assert_eq!(kind("&&", RawTag::AmpersandAmpersand), TokenKind::Operator);
    assert_eq!(kind(",", RawTag::Comma), TokenKind::Punctuation);
    assert_eq!(kind("?", RawTag::Question), TokenKind::Punctuation);
    assert_eq!(kind("::", RawTag::ColonColon), TokenKind::Punctuation);
    assert_eq!(kind("\u{1}", RawTag::InvalidByte), TokenKind::Punctuation);
}

#[test]
fn angles_get_a_mark() {
    let tok = cook(">", RawTag::Greater, Language::Java);
    assert_eq!(tok.map(|t| t.role()), Ok(Some(crate::BracketRole::Unresolved)));
}

#[test]
fn unterminated_literals_are_errors() {
    assert_eq!(
        cook("\"abc", RawTag::UnterminatedString, Language::Java),
        Err(LexError::UnterminatedLiteral {
            offset: 0,
            what: LiteralKind::String
        })
    );
    assert_eq!(
        cook("/* x", RawTag::UnterminatedBlockComment, Language::Java),
        Err(LexError::UnterminatedLiteral {
            offset: 0,
            what: LiteralKind::BlockComment
        })
    );
}

#[test]
fn escape_validation_is_opt_in() {
    let source = r#""\q""#;
    assert!(cook(source, RawTag::String, Language::Java).is_ok());

    let strict = LexOptions {
        validate_escapes: true,
    };
    let result = TokenCooker::new(source, Language::Java, strict).cook(RawTag::String, 0, 4);
    assert_eq!(
        result,
        Err(LexError::InvalidEscape {
            offset: 1,
            escape: "\\q".to_owned()
        })
    );
}

#[test]
fn verbatim_strings_skip_validation() {
    let strict = LexOptions {
        validate_escapes: true,
    };
    let source = r#"@"C:\q""#;
    let result = TokenCooker::new(source, Language::CSharp, strict).cook(RawTag::VerbatimString, 0, 7);
    assert!(result.is_ok());
}
