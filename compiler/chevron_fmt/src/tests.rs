#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn java(source: &str) -> Formatted {
    format_source(source, &FormatOptions::for_language(Language::Java)).unwrap()
}

#[test]
fn pipeline_reports_change() {
    let formatted = java("List< String > names;");
    assert_eq!(formatted.text, "List<String> names;");
    assert!(formatted.changed);
    assert!(formatted.abandoned.is_empty());
}

#[test]
fn already_formatted_is_unchanged() {
    let formatted = java("Map<String, List<Long>> m;");
    assert_eq!(formatted.text, "Map<String, List<Long>> m;");
    assert!(!formatted.changed);
}

#[test]
fn abandoned_frames_are_warnings() {
    let formatted = java("if (a < b && c > d) { x = y; }");
    assert_eq!(formatted.text, "if (a < b && c > d) { x = y; }");
    assert_eq!(
        formatted.abandoned,
        vec![AbandonedFrame {
            offset: 6,
            reason: AbandonReason::LogicalOperator,
        }]
    );
}

#[test]
fn comparisons_with_literal_and_constant_operands_are_untouched() {
    for source in [
        "assert check(i < 0, j > -1);",
        "f(i < n, j > (k + 1));",
        "f(MAX < x, y > MIN);",
    ] {
        let formatted = java(source);
        assert_eq!(formatted.text, source);
        assert!(!formatted.changed, "{source}");
    }
}

#[test]
fn unclosed_generic_is_not_an_error() {
    let formatted = java("List<String");
    assert_eq!(formatted.text, "List<String");
    assert_eq!(formatted.abandoned.len(), 1);
    assert_eq!(formatted.abandoned[0].reason, AbandonReason::EndOfInput);
}

#[test]
fn lex_errors_propagate() {
    let err = format_source("String s = \"open;", &FormatOptions::default()).unwrap_err();
    assert_eq!(err.offset(), 11);
}

#[test]
fn escape_validation_is_opt_in() {
    let source = "String s = \"\\q\";";
    let mut options = FormatOptions::for_language(Language::Java);
    assert!(format_source(source, &options).is_ok());

    options.lex.validate_escapes = true;
    assert!(matches!(
        format_source(source, &options),
        Err(LexError::InvalidEscape { .. })
    ));
}

#[test]
fn csharp_and_cpp() {
    let cs = format_source(
        "Dictionary< string , List< int > > map = new();",
        &FormatOptions::for_language(Language::CSharp),
    )
    .unwrap();
    assert_eq!(cs.text, "Dictionary<string, List<int>> map = new();");

    let cpp = format_source(
        "std::map< int ,std::string > m; x = y >> 2;",
        &FormatOptions::for_language(Language::Cpp),
    )
    .unwrap();
    assert_eq!(cpp.text, "std::map<int, std::string> m; x = y >> 2;");
}
