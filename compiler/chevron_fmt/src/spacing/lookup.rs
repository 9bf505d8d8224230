//! O(1) spacing rule lookup.
//!
//! Pre-computes a table from token category pairs to spacing options.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

use super::{rules::SpaceRule, SpaceAction, SpaceOption, TokenCategory, SPACE_RULES};

/// Pre-computed lookup table for the spacing rules.
///
/// Every pair enumerable from an `Exact`/`OneOf` rule is resolved once
/// against the full priority-ordered rule list, so predicate rules with a
/// higher priority still win for those pairs. Remaining pairs fall back to
/// a linear scan of the predicate rules.
pub struct RulesMap {
    exact: FxHashMap<(TokenCategory, TokenCategory), SpaceOption>,

    /// Rules with `Any` or predicate matchers, in priority order.
    fallback_rules: Vec<&'static SpaceRule>,
}

impl RulesMap {
    pub fn new() -> Self {
        Self::from_rules(SPACE_RULES)
    }

    /// Build a map from an arbitrary rule list.
    pub fn from_rules(rules: &'static [SpaceRule]) -> Self {
        let mut sorted_rules: Vec<&'static SpaceRule> = rules.iter().collect();
        sorted_rules.sort_by_key(|r| r.priority);

        let mut exact = FxHashMap::default();
        let mut fallback_rules = Vec::new();

        for rule in &sorted_rules {
            match (rule.left.enumerate(), rule.right.enumerate()) {
                (Some(lefts), Some(rights)) => {
                    for &left in lefts {
                        for &right in rights {
                            exact
                                .entry((left, right))
                                .or_insert_with(|| first_match(&sorted_rules, left, right));
                        }
                    }
                }
                _ => fallback_rules.push(*rule),
            }
        }

        RulesMap {
            exact,
            fallback_rules,
        }
    }

    /// Option of the highest-priority matching rule, `Ignore` if none.
    #[inline]
    pub fn lookup(&self, left: TokenCategory, right: TokenCategory) -> SpaceOption {
        if let Some(&option) = self.exact.get(&(left, right)) {
            return option;
        }

        self.fallback_rules
            .iter()
            .find(|rule| rule.matches(left, right))
            .map_or(SpaceOption::Fixed(SpaceAction::Ignore), |rule| rule.option)
    }
}

impl Default for RulesMap {
    fn default() -> Self {
        Self::new()
    }
}

fn first_match(
    sorted_rules: &[&'static SpaceRule],
    left: TokenCategory,
    right: TokenCategory,
) -> SpaceOption {
    sorted_rules
        .iter()
        .find(|rule| rule.matches(left, right))
        .map_or(SpaceOption::Fixed(SpaceAction::Ignore), |rule| rule.option)
}

static GLOBAL_RULES_MAP: OnceLock<RulesMap> = OnceLock::new();

/// The global rules map (lazily initialized).
pub fn global_rules_map() -> &'static RulesMap {
    GLOBAL_RULES_MAP.get_or_init(RulesMap::new)
}

/// Look up the spacing option between two token categories.
#[inline]
pub fn lookup_spacing(left: TokenCategory, right: TokenCategory) -> SpaceOption {
    global_rules_map().lookup(left, right)
}
