//! Declarative spacing rules.
//!
//! Every spacing decision is an entry in `SPACE_RULES`. Rules are tried in
//! priority order (lower first, ties in definition order); the first match
//! names the option that decides the gap.

use super::{SpaceAction, SpaceOption, TokenCategory, TokenMatcher};

#[derive(Clone, Copy, Debug)]
pub struct SpaceRule {
    /// Human-readable name for debugging.
    pub name: &'static str,

    /// Matcher for the left (preceding) token.
    pub left: TokenMatcher,

    /// Matcher for the right (following) token.
    pub right: TokenMatcher,

    /// Option consulted when the rule matches.
    pub option: SpaceOption,

    /// Lower is checked first.
    pub priority: u8,
}

impl SpaceRule {
    #[inline]
    const fn new(
        name: &'static str,
        left: TokenMatcher,
        right: TokenMatcher,
        option: SpaceOption,
    ) -> Self {
        SpaceRule {
            name,
            left,
            right,
            option,
            priority: 50,
        }
    }

    /// A rule that ignores configuration.
    #[inline]
    const fn fixed(
        name: &'static str,
        left: TokenMatcher,
        right: TokenMatcher,
        action: SpaceAction,
    ) -> Self {
        Self::new(name, left, right, SpaceOption::Fixed(action))
    }

    #[inline]
    const fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    #[inline]
    pub fn matches(&self, left: TokenCategory, right: TokenCategory) -> bool {
        self.left.matches(left) && self.right.matches(right)
    }
}

#[allow(
    clippy::enum_glob_use,
    reason = "rule table reads better with bare category names"
)]
use TokenCategory::*;
use TokenMatcher::{Any, Exact, OneOf};

static WORDS: &[TokenCategory] = &[Ident, Keyword];

pub static SPACE_RULES: &[SpaceRule] = &[
    // Operators and opaque tokens keep their source spacing.
    SpaceRule::fixed(
        "AngleOperatorLeft",
        TokenMatcher::ANGLE_OPERATOR,
        Any,
        SpaceAction::Ignore,
    )
    .with_priority(10),
    SpaceRule::fixed(
        "AngleOperatorRight",
        Any,
        TokenMatcher::ANGLE_OPERATOR,
        SpaceAction::Ignore,
    )
    .with_priority(10),
    SpaceRule::fixed("OpaqueLeft", TokenMatcher::OPAQUE, Any, SpaceAction::Ignore)
        .with_priority(10),
    SpaceRule::fixed("OpaqueRight", Any, TokenMatcher::OPAQUE, SpaceAction::Ignore)
        .with_priority(10),
    // `List<List<T> >`
    SpaceRule::new(
        "CloseClose",
        Exact(GenericClose),
        Exact(GenericClose),
        SpaceOption::AngleShift,
    )
    .with_priority(20),
    // `List< T >`
    SpaceRule::new(
        "AfterOpen",
        Exact(GenericOpen),
        Any,
        SpaceOption::InsideAngle,
    )
    .with_priority(30),
    SpaceRule::new(
        "BeforeClose",
        Any,
        Exact(GenericClose),
        SpaceOption::InsideAngle,
    )
    .with_priority(30),
    // `List <T>`
    SpaceRule::new(
        "IdentOpen",
        Exact(Ident),
        Exact(GenericOpen),
        SpaceOption::BeforeAngle,
    )
    .with_priority(40),
    // `new ArrayList<>()`
    SpaceRule::new(
        "CloseParen",
        Exact(GenericClose),
        Exact(LParen),
        SpaceOption::AngleParen,
    )
    .with_priority(40),
    // `List<T> items`
    SpaceRule::new(
        "CloseWord",
        Exact(GenericClose),
        OneOf(WORDS),
        SpaceOption::AngleWord,
    )
    .with_priority(40),
    // `Map<K, V>`
    SpaceRule::new(
        "AfterComma",
        Exact(GenericComma),
        Any,
        SpaceOption::AfterComma,
    ),
    SpaceRule::new(
        "BeforeComma",
        Any,
        Exact(GenericComma),
        SpaceOption::BeforeComma,
    ),
];
