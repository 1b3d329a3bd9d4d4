//! Property tests for the extension gate and the permissive default.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use project::{EntryKind, Extensions, InclusionRule, WalkEntry, is_included};

fn entry(relative: &str) -> WalkEntry {
    WalkEntry::new(Path::new("/repo").join(relative), relative, EntryKind::File)
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(|segments| segments.iter().collect())
}

proptest! {
    #[test]
    fn disallowed_extensions_are_never_included(
        path in relative_path(),
        ext in "[a-z]{1,4}",
        allowed in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        prop_assume!(!allowed.contains(&ext));
        let exts = Extensions::new(&allowed);
        let relative = format!("{}.{ext}", path.display());
        let rules = vec![InclusionRule::glob("**").expect("glob")];

        prop_assert!(!is_included(&entry(&relative), &exts, &rules));
        prop_assert!(!is_included(&entry(&relative), &exts, &[]));
    }

    #[test]
    fn empty_rules_include_every_allowed_file(
        path in relative_path(),
        ext in prop::sample::select(vec!["js", "jsx", "mjs", "ts", "tsx"]),
    ) {
        let relative = format!("{}.{ext}", path.display());
        prop_assert!(is_included(&entry(&relative), &Extensions::default(), &[]));
    }

    #[test]
    fn leading_dot_is_irrelevant(ext in "[a-z]{1,4}") {
        let dotted = Extensions::new([format!(".{ext}")]);
        let bare = Extensions::new([ext.clone()]);
        prop_assert_eq!(dotted, bare);
    }
}
