use walk::WalkEntry;

use super::InclusionRule;
use crate::Extensions;

/// Applies the extension allow-list and the manifest rules to `entry`.
///
/// Files outside the allow-list are rejected outright; directories skip that
/// check. With no rules every remaining entry is included.
#[must_use]
pub fn is_included(entry: &WalkEntry, exts: &Extensions, rules: &[InclusionRule]) -> bool {
    if entry.is_file() && !exts.contains(entry.extension()) {
        return false;
    }

    if rules.is_empty() {
        return true;
    }

    rules.iter().any(|rule| rule.matches(entry))
}
