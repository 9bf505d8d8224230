//! Keyword resolution for the cooking layer.
//!
//! Each language has one reserved-word table. Lookup buckets by identifier
//! length first, so most identifiers are rejected by a single `match` on
//! `len()` before any string comparison.
//!
//! The literal words (`true`, `false`, `null`, `nullptr`) are resolved here
//! too, but classify as [`TokenKind::Literal`] rather than keywords.

use chevron_lexer_core::Language;

use crate::TokenKind;

/// Classify an identifier-shaped token.
///
/// Returns `Some(Keyword)` or `Some(Literal)` for reserved words of `lang`,
/// `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str, lang: Language) -> Option<TokenKind> {
    if !(2..=16).contains(&text.len()) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }
    if is_literal_word(text, lang) {
        return Some(TokenKind::Literal);
    }
    let reserved = match lang {
        Language::Java => is_java_keyword(text),
        Language::CSharp => is_csharp_keyword(text),
        Language::Cpp => is_cpp_keyword(text),
    };
    reserved.then_some(TokenKind::Keyword)
}

fn is_literal_word(text: &str, lang: Language) -> bool {
    match text {
        "true" | "false" => true,
        "null" => lang != Language::Cpp,
        "nullptr" => lang == Language::Cpp,
        _ => false,
    }
}

/// Java reserved words plus the contextual `var`, `record`, `sealed`, `permits`, `yield`.
fn is_java_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int" | "new" | "try" | "var"),
        4 => matches!(
            text,
            "byte" | "case" | "char" | "else" | "enum" | "goto" | "long" | "this" | "void"
        ),
        5 => matches!(
            text,
            "break" | "catch" | "class" | "const" | "final" | "float" | "short" | "super" | "throw"
            | "while" | "yield"
        ),
        6 => matches!(
            text,
            "assert" | "double" | "import" | "native" | "public" | "record" | "return" | "sealed"
            | "static" | "switch" | "throws"
        ),
        7 => matches!(
            text,
            "boolean" | "default" | "extends" | "finally" | "package" | "permits" | "private"
        ),
        8 => matches!(text, "abstract" | "continue" | "strictfp" | "volatile"),
        9 => matches!(text, "interface" | "protected" | "transient"),
        10 => matches!(text, "implements" | "instanceof"),
        12 => matches!(text, "synchronized"),
        _ => false,
    }
}

/// C# reserved words plus the common contextual keywords.
fn is_csharp_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "as" | "do" | "if" | "in" | "is"),
        3 => matches!(text, "for" | "int" | "new" | "out" | "ref" | "try" | "var"),
        4 => matches!(
            text,
            "base" | "bool" | "byte" | "case" | "char" | "else" | "enum" | "goto" | "lock" | "long"
            | "this" | "uint" | "void" | "when"
        ),
        5 => matches!(
            text,
            "async" | "await" | "break" | "catch" | "class" | "const" | "event" | "fixed" | "float"
            | "sbyte" | "short" | "throw" | "ulong" | "using" | "where" | "while" | "yield"
        ),
        6 => matches!(
            text,
            "double" | "extern" | "object" | "params" | "public" | "record" | "return" | "sealed"
            | "sizeof" | "static" | "string" | "struct" | "switch" | "typeof" | "unsafe" | "ushort"
        ),
        7 => matches!(
            text,
            "checked" | "decimal" | "default" | "dynamic" | "finally" | "foreach" | "partial"
            | "private" | "virtual"
        ),
        8 => matches!(
            text,
            "abstract" | "continue" | "delegate" | "explicit" | "implicit" | "internal" | "operator"
            | "override" | "readonly" | "volatile"
        ),
        9 => matches!(text, "interface" | "namespace" | "protected" | "unchecked"),
        10 => matches!(text, "stackalloc"),
        _ => false,
    }
}

/// C++20 keywords and alternative operator spellings.
fn is_cpp_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "do" | "if" | "or"),
        3 => matches!(text, "and" | "asm" | "for" | "int" | "new" | "not" | "try" | "xor"),
        4 => matches!(
            text,
            "auto" | "bool" | "case" | "char" | "else" | "enum" | "goto" | "long" | "this" | "void"
        ),
        5 => matches!(
            text,
            "bitor" | "break" | "catch" | "class" | "compl" | "const" | "float" | "or_eq" | "short"
            | "throw" | "union" | "using" | "while"
        ),
        6 => matches!(
            text,
            "and_eq" | "bitand" | "delete" | "double" | "export" | "extern" | "friend" | "inline"
            | "not_eq" | "public" | "return" | "signed" | "sizeof" | "static" | "struct" | "switch"
            | "typeid" | "xor_eq"
        ),
        7 => matches!(
            text,
            "alignas" | "alignof" | "char8_t" | "concept" | "default" | "mutable" | "private"
            | "typedef" | "virtual" | "wchar_t"
        ),
        8 => matches!(
            text,
            "char16_t" | "char32_t" | "co_await" | "co_yield" | "continue" | "decltype" | "explicit"
            | "noexcept" | "operator" | "register" | "requires" | "template" | "typename"
            | "unsigned" | "volatile"
        ),
        9 => matches!(
            text,
            "co_return" | "consteval" | "constexpr" | "constinit" | "namespace" | "protected"
        ),
        10 => matches!(text, "const_cast"),
        11 => matches!(text, "static_cast"),
        12 => matches!(text, "dynamic_cast" | "thread_local"),
        13 => matches!(text, "static_assert"),
        16 => matches!(text, "reinterpret_cast"),
        _ => false,
    }
}
