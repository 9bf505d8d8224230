//! Raw token tags produced by the scanner.

/// Classification of a raw token.
///
/// Discriminants are grouped into ranges (literals, operators, delimiters,
/// trivia, errors) so related tags sort together; the cooking layer relies
/// on the grouping only through the `is_*` helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals (0-15) ===
    Ident = 0,
    Int = 1,
    Float = 2,
    HexInt = 3,
    BinInt = 4,
    /// `"..."`, including C++ encoding prefixes and C# `$"..."`.
    String = 5,
    /// Java `"""..."""`.
    TextBlock = 6,
    /// C# `@"..."` / `$@"..."`.
    VerbatimString = 7,
    /// C++ `R"delim(...)delim"`.
    RawString = 8,
    Char = 9,

    // === Operators (32-79) ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Ampersand = 38,
    Pipe = 39,
    Tilde = 40,
    Bang = 41,
    Equal = 42,
    Less = 43,
    /// Always a single `>`; runs are never merged so the disambiguator can
    /// pair each one with a generic opener.
    Greater = 44,
    Dot = 45,
    Question = 46,
    Colon = 47,
    PlusPlus = 48,
    MinusMinus = 49,
    PlusEqual = 50,
    MinusEqual = 51,
    StarEqual = 52,
    SlashEqual = 53,
    PercentEqual = 54,
    CaretEqual = 55,
    AmpersandEqual = 56,
    PipeEqual = 57,
    EqualEqual = 58,
    BangEqual = 59,
    LessEqual = 60,
    GreaterEqual = 61,
    Shl = 62,
    ShlEqual = 63,
    Spaceship = 64,
    AmpersandAmpersand = 65,
    PipePipe = 66,
    Arrow = 67,
    FatArrow = 68,
    ColonColon = 69,
    QuestionQuestion = 70,
    QuestionQuestionEqual = 71,
    QuestionDot = 72,
    DotDotDot = 73,

    // === Delimiters (80-111) ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    At = 88,
    Hash = 89,
    Backslash = 90,
    Dollar = 91,
    Backtick = 92,

    // === Trivia (112-127) ===
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,
    /// A `#` directive line (with `\` continuations).
    Preprocessor = 116,
    /// Leading UTF-8 byte order mark.
    Bom = 117,

    // === Errors (240-254) ===
    /// Control character or DEL outside any literal.
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedBlockComment = 243,
    UnterminatedRawString = 244,
    UnterminatedTextBlock = 245,
    InteriorNull = 246,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Source text of tags with a fixed spelling.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::Equal => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Dot => ".",
            Self::Question => "?",
            Self::Colon => ":",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::CaretEqual => "^=",
            Self::AmpersandEqual => "&=",
            Self::PipeEqual => "|=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Shl => "<<",
            Self::ShlEqual => "<<=",
            Self::Spaceship => "<=>",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::ColonColon => "::",
            Self::QuestionQuestion => "??",
            Self::QuestionQuestionEqual => "??=",
            Self::QuestionDot => "?.",
            Self::DotDotDot => "...",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::At => "@",
            Self::Hash => "#",
            Self::Backslash => "\\",
            Self::Dollar => "$",
            Self::Backtick => "`",
            Self::Bom => "\u{FEFF}",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name, used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int | Self::HexInt | Self::BinInt => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::TextBlock => "text block",
            Self::VerbatimString => "verbatim string",
            Self::RawString => "raw string",
            Self::Char => "char",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Preprocessor => "preprocessor directive",
            Self::Bom => "byte order mark",
            Self::InvalidByte => "invalid byte",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedChar => "unterminated char",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::UnterminatedRawString => "unterminated raw string",
            Self::UnterminatedTextBlock => "unterminated text block",
            Self::InteriorNull => "null byte",
            Self::Eof => "end of file",
            _ => "punctuation",
        }
    }

    /// Whitespace, newlines, comments, directives and the BOM.
    pub fn is_trivia(self) -> bool {
        (self as u8) >= 112 && (self as u8) < 128
    }

    /// Operator tags (`+`, `<`, `>=`, `::`, ...).
    pub fn is_operator(self) -> bool {
        (32..80).contains(&(self as u8))
    }

    /// Tags the scanner emits for malformed input.
    pub fn is_error(self) -> bool {
        (240..255).contains(&(self as u8))
    }
}

/// A scanned token: tag plus byte length. Position is implicit in the
/// running sum of lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
