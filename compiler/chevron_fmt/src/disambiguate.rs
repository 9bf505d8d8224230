//! Bracket disambiguation.
//!
//! Decides, for every `<` and `>` token, whether it delimits a generic
//! argument list or is a relational/shift operator.
//!
//! # Algorithm
//!
//! A single greedy pass over the significant tokens (whitespace, comments
//! and directives are looked through) keeps a stack of tentative
//! [`GenericFrame`]s:
//!
//! 1. A `<` after an identifier, a generic `>`, a `.`, or a configured
//!    keyword opens a frame. Any other `<` is a relational operator.
//! 2. Tokens that cannot appear inside a type argument list (`;`, braces,
//!    assignments, `&&`/`||` at the frame's depth, a closing paren below
//!    the frame, and in Java and C# a literal at the frame's depth) abandon
//!    frames. Abandoning a frame downgrades every bracket resolved since it
//!    opened.
//! 3. A `>` at the top frame's paren depth pops and pairs it. When the
//!    stack empties, the token after the nest is checked: a literal
//!    abandons the nest, and so does an identifier, `(` or prefix operator
//!    after a head that is not a type name (`a < b, c > d`, `f(i < n, j > -1)`).
//! 4. Brackets left over are folded into operators: `>` directly next to
//!    another operator `>` (or `>=`) is a shift, anything else relational.
//!
//! There is no backtracking; `a < b >>> c` closes on the first `>`.

use std::fmt;

use chevron_lexer::{BracketRole, Language, Token, TokenKind};
use tracing::{debug, trace};

static JAVA_GENERIC_KEYWORDS: &[&str] = &[
    "new",
    "extends",
    "super",
    "implements",
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "default",
    "strictfp",
];

static CSHARP_GENERIC_KEYWORDS: &[&str] = &[
    "new",
    "where",
    "class",
    "struct",
    "interface",
    "record",
    "public",
    "protected",
    "private",
    "internal",
    "static",
];

static CPP_GENERIC_KEYWORDS: &[&str] = &[
    "template",
    "static_cast",
    "dynamic_cast",
    "const_cast",
    "reinterpret_cast",
];

static CPP_FORCED_KEYWORDS: &[&str] = &["template"];

/// Language-specific knobs of the disambiguator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisambiguatorConfig {
    /// Keywords after which a `<` opens a generic frame.
    pub generic_keywords: &'static [&'static str],
    /// Subset of `generic_keywords` whose frames survive assignments
    /// (`template<typename T = int>`).
    pub forced_keywords: &'static [&'static str],
    /// Type names start with an uppercase letter and are not
    /// `CONSTANT_CASE`. Used to reject `a < b, c > d` as a declaration.
    pub capitalized_types: bool,
    /// Literals may appear as arguments (`std::array<int, 3>`). When off,
    /// a literal directly inside a frame abandons it.
    pub literal_arguments: bool,
}

impl DisambiguatorConfig {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Java => DisambiguatorConfig {
                generic_keywords: JAVA_GENERIC_KEYWORDS,
                forced_keywords: &[],
                capitalized_types: true,
                literal_arguments: false,
            },
            Language::CSharp => DisambiguatorConfig {
                generic_keywords: CSHARP_GENERIC_KEYWORDS,
                forced_keywords: &[],
                capitalized_types: true,
                literal_arguments: false,
            },
            Language::Cpp => DisambiguatorConfig {
                generic_keywords: CPP_GENERIC_KEYWORDS,
                forced_keywords: CPP_FORCED_KEYWORDS,
                capitalized_types: false,
                literal_arguments: true,
            },
        }
    }
}

impl Default for DisambiguatorConfig {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

/// A tentatively open generic argument list.
///
/// A frame carries no confirmed flag. Popping it on the matching `>` pairs
/// the brackets, and once the outermost frame of a nest is popped the
/// follow check either confirms the whole nest or downgrades it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericFrame {
    /// Token index of the `<`.
    pub open: usize,
    /// Paren/bracket depth at the `<`.
    pub paren_depth: u32,
    /// Opened by a forced keyword; not abandoned by assignments.
    pub forced: bool,
    /// Token index of the significant token before the `<`.
    pub head: Option<usize>,
}

/// Why a frame was given up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbandonReason {
    StatementEnd,
    Assignment,
    Brace,
    LogicalOperator,
    UnbalancedDelimiter,
    EndOfInput,
    LiteralFollows,
    NotATypeName,
    LiteralArgument,
}

impl AbandonReason {
    pub fn name(self) -> &'static str {
        match self {
            AbandonReason::StatementEnd => "statement end",
            AbandonReason::Assignment => "assignment",
            AbandonReason::Brace => "brace",
            AbandonReason::LogicalOperator => "logical operator",
            AbandonReason::UnbalancedDelimiter => "unbalanced delimiter",
            AbandonReason::EndOfInput => "end of input",
            AbandonReason::LiteralFollows => "literal follows",
            AbandonReason::NotATypeName => "not a type name",
            AbandonReason::LiteralArgument => "literal argument",
        }
    }
}

impl fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Warning for a `<` that looked like a generic opener but was not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AbandonedFrame {
    /// Byte offset of the `<`.
    pub offset: u32,
    pub reason: AbandonReason,
}

/// Tokens with every bracket role resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disambiguated<'src> {
    pub tokens: Vec<Token<'src>>,
    pub abandoned: Vec<AbandonedFrame>,
}

/// Resolve the role of every `<` and `>` in `tokens`.
#[tracing::instrument(level = "trace", skip_all, fields(tokens = tokens.len()))]
pub fn disambiguate<'src>(
    tokens: &[Token<'src>],
    config: &DisambiguatorConfig,
) -> Disambiguated<'src> {
    let mut engine = Engine {
        tokens: tokens.to_vec(),
        config,
        frames: Vec::new(),
        abandoned: Vec::new(),
        paren_depth: 0,
        prev: None,
    };
    engine.run();
    Disambiguated {
        tokens: engine.tokens,
        abandoned: engine.abandoned,
    }
}

struct Engine<'cfg, 'src> {
    tokens: Vec<Token<'src>>,
    config: &'cfg DisambiguatorConfig,
    frames: Vec<GenericFrame>,
    abandoned: Vec<AbandonedFrame>,
    paren_depth: u32,
    /// Index of the last significant token.
    prev: Option<usize>,
}

impl Engine<'_, '_> {
    fn run(&mut self) {
        for index in 0..self.tokens.len() {
            let token = self.tokens[index];
            if token.is_trivia() {
                continue;
            }
            self.step(index, &token);
            self.prev = Some(index);
        }
        self.abandon_from(0, AbandonReason::EndOfInput, self.tokens.len());
        self.fold_operators();
    }

    fn step(&mut self, index: usize, token: &Token<'_>) {
        if token.is_open_angle() {
            self.open_angle(index);
            return;
        }
        if token.is_close_angle() {
            self.close_angle(index);
            return;
        }
        if token.kind.is_literal() && !self.config.literal_arguments {
            let level = self.first_frame_at_depth(|depth| depth == self.paren_depth);
            self.abandon_from(level, AbandonReason::LiteralArgument, index);
            return;
        }
        if !matches!(token.kind, TokenKind::Operator | TokenKind::Punctuation) {
            return;
        }

        match token.text {
            "(" | "[" => self.paren_depth += 1,
            ")" | "]" => {
                let level = self.first_frame_at_depth(|depth| depth >= self.paren_depth);
                self.abandon_from(level, AbandonReason::UnbalancedDelimiter, index);
                self.paren_depth = self.paren_depth.saturating_sub(1);
            }
            ";" => self.abandon_from(0, AbandonReason::StatementEnd, index),
            "{" | "}" => self.abandon_from(0, AbandonReason::Brace, index),
            "&&" | "||" => {
                let level = self.first_frame_at_depth(|depth| depth == self.paren_depth);
                self.abandon_from(level, AbandonReason::LogicalOperator, index);
            }
            text if is_assignment(text) => {
                // Frames above the innermost forced frame.
                let level = self
                    .frames
                    .iter()
                    .rposition(|frame| frame.forced)
                    .map_or(0, |forced| forced + 1);
                self.abandon_from(level, AbandonReason::Assignment, index);
            }
            _ => {}
        }
    }

    fn open_angle(&mut self, index: usize) {
        let opener = self.prev.map(|prev| &self.tokens[prev]);
        let (opens, forced) = match opener {
            Some(prev) => match prev.kind {
                TokenKind::Ident => (true, false),
                TokenKind::Keyword => (
                    self.config.generic_keywords.iter().any(|kw| *kw == prev.text),
                    self.config.forced_keywords.iter().any(|kw| *kw == prev.text),
                ),
                TokenKind::Punctuation => (prev.text == ".", false),
                _ => (prev.role() == Some(BracketRole::GenericClose), false),
            },
            None => (false, false),
        };

        if opens {
            self.frames.push(GenericFrame {
                open: index,
                paren_depth: self.paren_depth,
                forced,
                head: self.prev,
            });
        } else {
            self.tokens[index].set_role(BracketRole::RelationalOp);
        }
    }

    fn close_angle(&mut self, index: usize) {
        let Some(&top) = self.frames.last() else {
            return;
        };
        if top.paren_depth != self.paren_depth {
            return;
        }
        self.frames.pop();
        self.tokens[top.open].set_role(BracketRole::GenericOpen);
        self.tokens[index].set_role(BracketRole::GenericClose);

        if self.frames.is_empty() {
            self.check_follow(top, index);
        }
    }

    /// Confirm or abandon a completed nest by the token after it.
    fn check_follow(&mut self, outer: GenericFrame, close: usize) {
        let follow = self.tokens[close + 1..]
            .iter()
            .find(|token| !token.is_trivia());

        let verdict = match follow {
            Some(token) if token.kind.is_literal() => Some(AbandonReason::LiteralFollows),
            Some(token) if starts_operand(token) && !self.head_is_type(outer.head) => {
                Some(AbandonReason::NotATypeName)
            }
            _ => None,
        };

        let offset = self.tokens[outer.open].span.start;
        match verdict {
            None => trace!(offset, "confirmed generic nest"),
            Some(reason) => {
                self.record(offset, reason);
                self.downgrade(outer.open, close + 1);
            }
        }
    }

    fn head_is_type(&self, head: Option<usize>) -> bool {
        let Some(head) = head.map(|index| &self.tokens[index]) else {
            return true;
        };
        head.kind != TokenKind::Ident
            || !self.config.capitalized_types
            || (head.text.chars().next().is_some_and(char::is_uppercase)
                && !is_constant_case(head.text))
    }

    /// Lowest stack level whose frame depth satisfies `pred`. Depths are
    /// non-decreasing up the stack, so every frame above it matches too.
    fn first_frame_at_depth(&self, pred: impl Fn(u32) -> bool) -> usize {
        self.frames
            .iter()
            .position(|frame| pred(frame.paren_depth))
            .unwrap_or(self.frames.len())
    }

    /// Abandon `frames[level..]`, downgrading brackets in `open..end`.
    fn abandon_from(&mut self, level: usize, reason: AbandonReason, end: usize) {
        let Some(start) = self.frames.get(level).map(|frame| frame.open) else {
            return;
        };
        let dropped: Vec<GenericFrame> = self.frames.drain(level..).collect();
        for frame in dropped {
            let offset = self.tokens[frame.open].span.start;
            self.record(offset, reason);
        }
        self.downgrade(start, end);
    }

    fn record(&mut self, offset: u32, reason: AbandonReason) {
        debug!(offset, %reason, "abandoned generic frame");
        self.abandoned.push(AbandonedFrame { offset, reason });
    }

    fn downgrade(&mut self, start: usize, end: usize) {
        for token in &mut self.tokens[start..end] {
            if token.role().is_some_and(BracketRole::is_generic) {
                token.set_role(BracketRole::Unresolved);
            }
        }
    }

    /// Turn every non-generic bracket into an operator.
    fn fold_operators(&mut self) {
        for index in 0..self.tokens.len() {
            let token = self.tokens[index];
            match token.role() {
                Some(role) if role.is_generic() => {}
                Some(_) if token.is_open_angle() => {
                    self.tokens[index].set_role(BracketRole::RelationalOp);
                }
                Some(_) => {
                    let role = if self.shift_adjacent(index) {
                        BracketRole::ShiftOp
                    } else {
                        BracketRole::RelationalOp
                    };
                    self.tokens[index].set_role(role);
                }
                None => {}
            }
        }
    }

    /// A `>` touching another operator `>` or a `>=`.
    fn shift_adjacent(&self, index: usize) -> bool {
        let operator_close = |token: &Token<'_>| {
            token.is_close_angle() && !token.role().is_some_and(BracketRole::is_generic)
        };
        let before = index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(operator_close);
        let after = self
            .tokens
            .get(index + 1)
            .is_some_and(|token| operator_close(token) || token.is(">="));
        before || after
    }
}

/// A token that can begin the right operand of a comparison.
fn starts_operand(token: &Token<'_>) -> bool {
    match token.kind {
        TokenKind::Ident => true,
        TokenKind::Operator | TokenKind::Punctuation => {
            matches!(token.text, "(" | "-" | "+" | "!" | "~" | "++" | "--")
        }
        _ => false,
    }
}

/// `MAX`, `DEFAULT_SIZE`: at least two letters, none lowercase.
fn is_constant_case(name: &str) -> bool {
    name.chars().filter(|c| c.is_alphabetic()).count() > 1 && !name.chars().any(char::is_lowercase)
}

/// `=`, `+=`, `<<=`, `??=`... but not the comparisons.
fn is_assignment(text: &str) -> bool {
    text.ends_with('=') && !matches!(text, "==" | "!=" | "<=" | ">=")
}
