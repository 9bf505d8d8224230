//! Token matcher for spacing rule matching.

use super::TokenCategory;

/// Matcher for one side of a spacing rule.
///
/// - `Any` - matches any token
/// - `Exact(GenericOpen)` - matches only a generic `<`
/// - `OneOf(&[Ident, Keyword])` - matches words
/// - `Category(TokenCategory::is_opaque)` - matches comments and directives
#[derive(Clone, Copy, Debug)]
pub enum TokenMatcher {
    Any,
    Exact(TokenCategory),
    OneOf(&'static [TokenCategory]),
    Category(fn(TokenCategory) -> bool),
}

impl TokenMatcher {
    /// Match `<`/`>` resolved as operators.
    pub const ANGLE_OPERATOR: TokenMatcher =
        TokenMatcher::Category(TokenCategory::is_angle_operator);

    /// Match comments, directives and stray whitespace.
    pub const OPAQUE: TokenMatcher = TokenMatcher::Category(TokenCategory::is_opaque);

    #[inline]
    pub fn matches(&self, cat: TokenCategory) -> bool {
        match self {
            TokenMatcher::Any => true,
            TokenMatcher::Exact(expected) => *expected == cat,
            TokenMatcher::OneOf(categories) => categories.contains(&cat),
            TokenMatcher::Category(predicate) => predicate(cat),
        }
    }

    /// Categories this matcher enumerates, `None` for `Any` and predicates.
    pub(super) fn enumerate(&self) -> Option<&[TokenCategory]> {
        match self {
            TokenMatcher::Exact(cat) => Some(std::slice::from_ref(cat)),
            TokenMatcher::OneOf(categories) => Some(categories),
            TokenMatcher::Any | TokenMatcher::Category(_) => None,
        }
    }
}

impl PartialEq for TokenMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TokenMatcher::Any, TokenMatcher::Any) => true,
            (TokenMatcher::Exact(a), TokenMatcher::Exact(b)) => a == b,
            (TokenMatcher::OneOf(a), TokenMatcher::OneOf(b)) => std::ptr::eq(*a, *b),
            (TokenMatcher::Category(a), TokenMatcher::Category(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

impl Eq for TokenMatcher {}
