//! Lexical dialects understood by the scanner.
//!
//! The three languages share C-family punctuation and generic/template
//! syntax; they differ only in literal forms and preprocessing.

use std::fmt;

/// Source language of a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Java: text blocks, `$` in identifiers, `_` digit separators.
    #[default]
    Java,
    /// C#: verbatim/interpolated strings, preprocessor directives.
    CSharp,
    /// C++: raw strings, encoding prefixes, `'` digit separators,
    /// preprocessor directives.
    Cpp,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 3] = [Language::Java, Language::CSharp, Language::Cpp];

    /// Detect the language from a file extension (without the leading dot).
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for extensions of
    /// languages without generic syntax (e.g. `.c`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        match ext.as_str() {
            "java" => Some(Language::Java),
            "cs" => Some(Language::CSharp),
            "cpp" | "cc" | "cp" | "cxx" | "c++" | "hpp" | "hh" | "hp" | "hxx" | "h++" | "inl"
            | "h" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Parse a language name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "java" => Some(Language::Java),
            "cs" | "c#" | "csharp" => Some(Language::CSharp),
            "cpp" | "c++" | "cxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Short lowercase name (`java`, `cs`, `cpp`).
    pub fn name(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Cpp => "cpp",
        }
    }

    /// `#` at the start of a line begins a directive that runs to end of line.
    pub fn has_preprocessor(self) -> bool {
        matches!(self, Language::CSharp | Language::Cpp)
    }

    /// `"""` opens a multi-line text block.
    pub fn has_text_blocks(self) -> bool {
        self == Language::Java
    }

    /// `@"..."` and `$"..."` string forms.
    pub fn has_verbatim_strings(self) -> bool {
        self == Language::CSharp
    }

    /// `R"delim(...)delim"` raw strings and `u8`/`u`/`U`/`L` prefixes.
    pub fn has_raw_strings(self) -> bool {
        self == Language::Cpp
    }

    /// `'` between digits is a separator (`1'000'000`).
    pub fn has_quote_digit_separators(self) -> bool {
        self == Language::Cpp
    }

    /// `$` may appear in identifiers.
    pub fn dollar_in_identifiers(self) -> bool {
        matches!(self, Language::Java | Language::Cpp)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
