//! Property-based tests for the formatter.
//!
//! Generates generic declarations with arbitrary same-line spacing and
//! relational/shift expressions, and checks that:
//! 1. Generic lists normalize to the canonical spelling.
//! 2. Operator expressions come back unchanged.
//! 3. Formatting is idempotent and only ever touches spaces and tabs.
//! 4. Re-tokenizing the output resolves every bracket the same way.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use chevron_fmt::{disambiguate, format_source, DisambiguatorConfig, FormatOptions, Language};
use chevron_lexer::{tokenize, BracketRole, LexOptions, Token};
use proptest::prelude::*;

// -- Code Generation Strategies --

/// Uppercase type names are never keywords.
fn type_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,8}").expect("valid regex")
}

/// The trailing underscore keeps generated names clear of every keyword.
fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,6}_").expect("valid regex")
}

/// `CONSTANT_CASE` names compare like values, never name types.
fn constant_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{2}[A-Z0-9_]{0,5}").expect("valid regex")
}

/// One side of a comparison: names, literals, negations, parentheses.
fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => ident_strategy(),
        1 => constant_strategy(),
        1 => (0u32..1000).prop_map(|n| n.to_string()),
        1 => ident_strategy().prop_map(|s| format!("\"{s}\"")),
        1 => (0u32..100).prop_map(|n| format!("-{n}")),
        1 => ident_strategy().prop_map(|s| format!("({s} + 1)")),
    ]
}

/// Same-line gap.
fn space_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "", " ", "  ", "\t", " \t "])
}

/// A type expression as `(spaced, canonical)`.
fn type_expr_strategy() -> impl Strategy<Value = (String, String)> {
    let leaf = type_name_strategy().prop_map(|name| (name.clone(), name));
    leaf.prop_recursive(4, 24, 3, |inner| {
        (
            type_name_strategy(),
            space_strategy(),
            space_strategy(),
            space_strategy(),
            prop::collection::vec((inner, space_strategy(), space_strategy()), 1..4),
        )
            .prop_map(|(name, before_open, after_open, before_close, args)| {
                let mut spaced = format!("{name}{before_open}<{after_open}");
                let mut canonical = format!("{name}<");
                for (i, ((arg_spaced, arg_canonical), before_comma, after_comma)) in
                    args.iter().enumerate()
                {
                    if i > 0 {
                        spaced.push_str(before_comma);
                        spaced.push(',');
                        spaced.push_str(after_comma);
                        canonical.push_str(", ");
                    }
                    spaced.push_str(arg_spaced);
                    canonical.push_str(arg_canonical);
                }
                spaced.push_str(before_close);
                spaced.push('>');
                canonical.push('>');
                (spaced, canonical)
            })
    })
}

/// A declaration `Type<...> name;` as `(spaced, canonical)`.
fn declaration_strategy() -> impl Strategy<Value = (String, String)> {
    (type_expr_strategy(), ident_strategy()).prop_map(|((spaced, canonical), name)| {
        (format!("{spaced} {name};"), format!("{canonical} {name};"))
    })
}

/// Statements whose `<`/`>` are all operators.
fn comparison_strategy() -> impl Strategy<Value = String> {
    (
        ident_strategy(),
        prop::collection::vec(operand_strategy(), 4),
        prop::collection::vec(space_strategy(), 4),
        0..4usize,
    )
        .prop_map(|(var, operands, spaces, shape)| {
            let (a, b, c, d) = (&operands[0], &operands[1], &operands[2], &operands[3]);
            let (s0, s1, s2, s3) = (spaces[0], spaces[1], spaces[2], spaces[3]);
            match shape {
                0 => format!("check({a}{s0}<{s1}{b}, {c}{s2}>{s3}{d});"),
                1 => format!("if ({a}{s0}<{s1}{b} && {c}{s2}>{s3}{d}) {{ }}"),
                2 => format!("{var} = {b}{s0}>>{s1}{c} >>> {d};"),
                _ => format!("for (int {var} = 0; {var}{s0}<{s1}{b}; {var}++) {c}{s2}>={s3}{d};"),
            }
        })
}

fn java() -> FormatOptions {
    FormatOptions::for_language(Language::Java)
}

fn roles(source: &str) -> Vec<BracketRole> {
    let tokens = tokenize(source, Language::Java, LexOptions::default()).unwrap();
    disambiguate(&tokens, &DisambiguatorConfig::default())
        .tokens
        .iter()
        .filter_map(Token::role)
        .collect()
}

fn without_blanks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ' ' | '\t')).collect()
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generic_declarations_normalize((spaced, canonical) in declaration_strategy()) {
        let formatted = format_source(&spaced, &java()).unwrap();
        prop_assert_eq!(&formatted.text, &canonical);
        prop_assert!(formatted.abandoned.is_empty());
    }

    #[test]
    fn every_open_frame_gets_a_closer((spaced, _) in declaration_strategy()) {
        let roles = roles(&spaced);
        let opens = roles.iter().filter(|r| **r == BracketRole::GenericOpen).count();
        let closes = roles.iter().filter(|r| **r == BracketRole::GenericClose).count();
        prop_assert_eq!(opens, closes);
        prop_assert_eq!(opens, roles.len() / 2);
    }

    #[test]
    fn operator_expressions_unchanged(source in comparison_strategy()) {
        let formatted = format_source(&source, &java()).unwrap();
        prop_assert_eq!(&formatted.text, &source);
        prop_assert!(!formatted.changed);
        prop_assert!(roles(&source).iter().all(|r| !r.is_generic()));
    }

    #[test]
    fn idempotent(
        (spaced, _) in declaration_strategy(),
        expr in comparison_strategy(),
    ) {
        let source = format!("{spaced}\n{expr}\n");
        let once = format_source(&source, &java()).unwrap();
        let twice = format_source(&once.text, &java()).unwrap();
        prop_assert_eq!(&once.text, &twice.text);
        prop_assert!(!twice.changed);
    }

    #[test]
    fn only_blanks_change(
        (spaced, _) in declaration_strategy(),
        expr in comparison_strategy(),
    ) {
        let source = format!("{expr} {spaced}");
        let formatted = format_source(&source, &java()).unwrap();
        prop_assert_eq!(without_blanks(&formatted.text), without_blanks(&source));
    }

    #[test]
    fn roles_survive_round_trip(
        (spaced, _) in declaration_strategy(),
        expr in comparison_strategy(),
    ) {
        let source = format!("{spaced}\n{expr}");
        let formatted = format_source(&source, &java()).unwrap();
        prop_assert_eq!(roles(&formatted.text), roles(&source));
    }
}
