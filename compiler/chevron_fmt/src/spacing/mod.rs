//! Declarative token spacing.
//!
//! Spacing between two adjacent tokens is decided by the first matching
//! rule in [`rules::SPACE_RULES`]. A rule names a [`SpaceOption`]; the
//! user's [`SpacingConfig`](crate::SpacingConfig) turns the option into a
//! concrete [`SpaceAction`].
//!
//! - [`TokenCategory`]: tokens abstracted for matching
//! - [`TokenMatcher`]: `Any` / `Exact` / `OneOf` / predicate matchers
//! - [`lookup_spacing`]: O(1) lookup over the pre-computed rule table

mod category;
mod lookup;
mod matcher;
mod rules;

pub use category::TokenCategory;
pub use lookup::{global_rules_map, lookup_spacing, RulesMap};
pub use matcher::TokenMatcher;
pub use rules::{SpaceRule, SPACE_RULES};

/// What to do with the whitespace between two tokens.
///
/// Whitespace containing a line break is never touched, whatever the
/// action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpaceAction {
    /// Keep whatever the source has.
    #[default]
    Ignore,
    /// Ensure at least one space.
    Add,
    /// Remove all spaces.
    Remove,
    /// Exactly one space.
    Force,
}

impl SpaceAction {
    /// Parse `ignore`, `add`, `remove` or `force` (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ignore" => Some(SpaceAction::Ignore),
            "add" => Some(SpaceAction::Add),
            "remove" => Some(SpaceAction::Remove),
            "force" => Some(SpaceAction::Force),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpaceAction::Ignore => "ignore",
            SpaceAction::Add => "add",
            SpaceAction::Remove => "remove",
            SpaceAction::Force => "force",
        }
    }

    /// Rewrite a same-line gap (spaces and tabs only).
    pub fn apply(self, gap: &str) -> &str {
        match self {
            SpaceAction::Ignore => gap,
            SpaceAction::Add if gap.is_empty() => " ",
            SpaceAction::Add => gap,
            SpaceAction::Remove => "",
            SpaceAction::Force => " ",
        }
    }
}

/// The spacing knob a rule consults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceOption {
    /// Not configurable.
    Fixed(SpaceAction),
    /// Between two generic closers: `> >`.
    AngleShift,
    /// After a generic opener and before a generic closer.
    InsideAngle,
    /// Between a type name and its generic opener: `List <`.
    BeforeAngle,
    /// Between a generic closer and `(`.
    AngleParen,
    /// Between a generic closer and a following word.
    AngleWord,
    /// After a comma in a generic argument list.
    AfterComma,
    /// Before a comma in a generic argument list.
    BeforeComma,
}

impl SpaceOption {
    /// Every configurable option.
    pub const CONFIGURABLE: [SpaceOption; 7] = [
        SpaceOption::AngleShift,
        SpaceOption::InsideAngle,
        SpaceOption::BeforeAngle,
        SpaceOption::AngleParen,
        SpaceOption::AngleWord,
        SpaceOption::AfterComma,
        SpaceOption::BeforeComma,
    ];

    /// Config file key, `None` for fixed actions.
    pub fn key(self) -> Option<&'static str> {
        match self {
            SpaceOption::Fixed(_) => None,
            SpaceOption::AngleShift => Some("sp_angle_shift"),
            SpaceOption::InsideAngle => Some("sp_inside_angle"),
            SpaceOption::BeforeAngle => Some("sp_before_angle"),
            SpaceOption::AngleParen => Some("sp_angle_paren"),
            SpaceOption::AngleWord => Some("sp_angle_word"),
            SpaceOption::AfterComma => Some("sp_after_comma"),
            SpaceOption::BeforeComma => Some("sp_before_comma"),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::CONFIGURABLE
            .into_iter()
            .find(|option| option.key() == Some(key))
    }
}
