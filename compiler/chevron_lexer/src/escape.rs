//! Escape sequence validation.
//!
//! The formatter never rewrites literal contents, so escapes are only
//! checked, not decoded. Validation is opt-in through
//! `LexOptions::validate_escapes`.

use chevron_lexer_core::Language;

/// Find the first escape in `literal` that `lang` does not define.
///
/// `literal` is the full token text, quotes and prefixes included. Returns
/// the byte offset of the offending backslash within `literal` and the
/// escape as written.
pub(crate) fn find_invalid_escape(literal: &str, lang: Language) -> Option<(usize, String)> {
    let bytes = literal.as_bytes();
    let mut i = 0;
    while let Some(found) = bytes[i..].iter().position(|&b| b == b'\\') {
        let at = i + found;
        let rest = &literal[at + 1..];
        match escape_len(rest, lang) {
            Some(len) => i = at + 1 + len,
            None => {
                let shown: String = literal[at..].chars().take(2).collect();
                return Some((at, shown));
            }
        }
        if i >= bytes.len() {
            break;
        }
    }
    None
}

/// Length of a valid escape body following the backslash, or `None`.
fn escape_len(rest: &str, lang: Language) -> Option<usize> {
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    match (lang, first) {
        // Line continuation: Java text blocks, C++ line splices.
        (Language::Java | Language::Cpp, b'\n') => Some(1),
        (Language::Java | Language::Cpp, b'\r') => {
            Some(1 + usize::from(bytes.get(1) == Some(&b'\n')))
        }

        (_, b'\\' | b'"' | b'\'' | b'n' | b'r' | b't' | b'b' | b'f') => Some(1),
        (Language::Java, b's') => Some(1),
        (Language::CSharp, b'a' | b'v' | b'e') => Some(1),
        (Language::Cpp, b'a' | b'v' | b'?') => Some(1),

        (Language::Java | Language::Cpp, b'0'..=b'7') => {
            Some(1 + count_while(&bytes[1..], 2, |b| matches!(b, b'0'..=b'7')))
        }
        (Language::CSharp, b'0') => Some(1),

        // Java allows any number of `u`s: `\uuu0041`.
        (Language::Java, b'u') => {
            let us = count_while(bytes, usize::MAX, |b| b == b'u');
            exact_hex(&bytes[us..], 4).then_some(us + 4)
        }
        (Language::CSharp | Language::Cpp, b'u') => exact_hex(&bytes[1..], 4).then_some(5),
        (Language::CSharp | Language::Cpp, b'U') => exact_hex(&bytes[1..], 8).then_some(9),
        (Language::CSharp, b'x') => {
            let n = count_while(&bytes[1..], 4, |b| b.is_ascii_hexdigit());
            (n > 0).then_some(1 + n)
        }
        (Language::Cpp, b'x') if bytes.get(1) == Some(&b'{') => braced(bytes),
        (Language::Cpp, b'x') => {
            let n = count_while(&bytes[1..], usize::MAX, |b| b.is_ascii_hexdigit());
            (n > 0).then_some(1 + n)
        }
        // C++23 delimited escapes: `\o{17}`, `\N{LATIN SMALL LETTER A}`.
        (Language::Cpp, b'o' | b'N') if bytes.get(1) == Some(&b'{') => braced(bytes),
        _ => None,
    }
}

fn count_while(bytes: &[u8], max: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take(max).take_while(|&&b| pred(b)).count()
}

fn exact_hex(bytes: &[u8], n: usize) -> bool {
    bytes.len() >= n && bytes[..n].iter().all(u8::is_ascii_hexdigit)
}

/// `X{...}`: the letter, the braces, and a non-empty body.
fn braced(bytes: &[u8]) -> Option<usize> {
    let close = bytes.iter().position(|&b| b == b'}')?;
    (close > 2).then_some(close + 1)
}
