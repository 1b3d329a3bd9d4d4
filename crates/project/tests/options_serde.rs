//! Deserialising ProjectOptions from JSON.
#![cfg(feature = "serde")]

use std::path::Path;

use project::{Extensions, ProjectOptions};

#[test]
fn single_strings_and_lists_are_accepted() {
    let options: ProjectOptions = serde_json::from_str(
        r#"{
            "pattern": "src/**",
            "ignore": "fixtures",
            "unignore": ["fixtures/keep.ts"],
            "exts": ".ts",
            "cwd": "/work",
            "include_dirs": true
        }"#,
    )
    .expect("options");

    assert_eq!(options.patterns(), ["src/**"]);
    assert_eq!(options.ignore(), ["fixtures"]);
    assert_eq!(options.unignore(), ["fixtures/keep.ts"]);
    assert_eq!(options.exts(), &Extensions::new(["ts"]));
    assert_eq!(options.cwd(), Some(Path::new("/work")));
    assert!(options.includes_dirs());
}

#[test]
fn missing_fields_use_defaults() {
    let options: ProjectOptions = serde_json::from_str("{}").expect("options");
    assert!(options.patterns().is_empty());
    assert_eq!(options.exts(), &Extensions::default());
    assert_eq!(options.ignore_file(), ".gitignore");
    assert_eq!(options.manifest(), "package.json");
}
