//! Behaviour of the compiled ignore predicate.
//!
//! The predicate ignores a path when a positive pattern matches and no
//! negative pattern does. An empty pattern set must ignore nothing even for
//! paths a glob compiler would treat specially.

use filters::{IgnoreMatcher, PatternSet};
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn segment() -> impl Strategy<Value = String> {
    "[a-z_]{1,8}"
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(segment(), 1..5).prop_map(|parts| parts.iter().collect())
}

// =============================================================================
// Empty Set
// =============================================================================

proptest! {
    #[test]
    fn empty_set_ignores_nothing(path in relative_path()) {
        let matcher = IgnoreMatcher::new("/root", &PatternSet::new()).unwrap();
        prop_assert!(!matcher.is_ignored(&path));
        prop_assert!(!matcher.is_ignored(&Path::new("/root").join(&path)));
    }

    #[test]
    fn identical_negative_set_cancels_positive(path in relative_path()) {
        let set = PatternSet::from_parts(["**"], ["**"]);
        let matcher = IgnoreMatcher::new("/root", &set).unwrap();
        prop_assert!(!matcher.is_ignored(&path));
    }

    #[test]
    fn match_everything_ignores_every_path(path in relative_path()) {
        let set = PatternSet::from_parts(["**"], Vec::<String>::new());
        let matcher = IgnoreMatcher::new("/root", &set).unwrap();
        prop_assert!(matcher.is_ignored(&path));
    }
}

// =============================================================================
// Negation
// =============================================================================

#[test]
fn negation_keeps_single_file_in_ignored_tree() {
    let set = PatternSet::from_parts(["build/**"], ["build/keep.txt"]);
    let matcher = IgnoreMatcher::new("/root", &set).unwrap();

    assert!(matcher.is_ignored(Path::new("build/tmp.o")));
    assert!(matcher.is_ignored(Path::new("build/nested/tmp.o")));
    assert!(!matcher.is_ignored(Path::new("build/keep.txt")));
    assert!(!matcher.is_ignored(Path::new("src/main.ts")));
}

#[test]
fn negation_applies_regardless_of_insertion_order() {
    let mut first = PatternSet::new();
    first.push_negative("logs/keep.log");
    first.push_positive("logs/*.log");

    let mut second = PatternSet::new();
    second.push_positive("logs/*.log");
    second.push_negative("logs/keep.log");

    for set in [first, second] {
        let matcher = IgnoreMatcher::new("/root", &set).unwrap();
        assert!(matcher.is_ignored(Path::new("logs/debug.log")));
        assert!(!matcher.is_ignored(Path::new("logs/keep.log")));
    }
}

#[test]
fn absolute_and_relative_paths_agree() {
    let set = PatternSet::from_parts(["coverage/**"], ["coverage/lcov.info"]);
    let matcher = IgnoreMatcher::new("/root", &set).unwrap();

    for relative in ["coverage/index.html", "coverage/lcov.info", "src/a.ts"] {
        let absolute = Path::new("/root").join(relative);
        assert_eq!(
            matcher.is_ignored(Path::new(relative)),
            matcher.is_ignored(&absolute),
            "{relative}"
        );
    }
}
