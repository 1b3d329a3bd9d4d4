//! Manifest-derived inclusion rules and the predicate that applies them.

mod predicate;
mod rule;

pub use predicate::is_included;
pub use rule::{InclusionRule, derive_inclusion_rules, load_inclusion_rules, workspace_glob};
