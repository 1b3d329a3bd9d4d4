use super::*;
use std::fs;
use std::path::Path;

fn matcher_for(root: &Path, options: &PatternOptions) -> IgnoreMatcher {
    let set = partition_patterns(root, options).expect("partition");
    IgnoreMatcher::new(root, &set).expect("compiled")
}

#[test]
fn no_sources_short_circuit_to_empty_set() {
    let temp = tempfile::tempdir().expect("tempdir");
    let set = partition_patterns(temp.path(), &PatternOptions::new()).expect("partition");
    assert!(set.is_empty());

    let matcher = IgnoreMatcher::new(temp.path(), &set).expect("compiled");
    assert!(matcher.is_never());
}

#[test]
fn caller_lists_without_ignore_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let options = PatternOptions::new()
        .with_ignore(["fixtures", "fixtures"])
        .with_unignore(["fixtures/keep.json"]);
    let set = partition_patterns(temp.path(), &options).expect("partition");

    assert_eq!(set.positive(), ["fixtures"]);
    assert_eq!(set.negative(), ["fixtures/keep.json"]);
}

#[test]
fn ignore_file_lines_are_partitioned_by_kind() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join(".gitignore"),
        "# generated\n/dist\n*.log\n!important.log\n",
    )
    .expect("write");

    let set = partition_patterns(temp.path(), &PatternOptions::new()).expect("partition");
    assert_eq!(set.positive(), ["dist", "dist/**", "**/*.log", "**/*.log/**"]);
    assert_eq!(set.negative(), ["**/important.log", "**/important.log/**"]);
}

#[test]
fn caller_patterns_come_before_ignore_file_patterns() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "/tmp\n").expect("write");

    let options = PatternOptions::new().with_ignore(["cache", "tmp"]);
    let set = partition_patterns(temp.path(), &options).expect("partition");
    assert_eq!(set.positive(), ["cache", "tmp", "tmp/**"]);
}

#[test]
fn custom_ignore_file_name() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "ignored-by-git\n").expect("write");
    fs::write(temp.path().join(".npmignore"), "ignored-by-npm\n").expect("write");

    let options = PatternOptions::new().with_ignore_file(".npmignore");
    let matcher = matcher_for(temp.path(), &options);
    assert!(matcher.is_ignored(Path::new("ignored-by-npm")));
    assert!(!matcher.is_ignored(Path::new("ignored-by-git")));
}

#[test]
fn ignore_file_that_is_a_directory_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::create_dir(temp.path().join(".gitignore")).expect("mkdir");

    let error = partition_patterns(temp.path(), &PatternOptions::new()).expect_err("error");
    assert_eq!(error.path(), temp.path().join(".gitignore"));
}

#[test]
fn directory_pattern_covers_contents() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "node_modules/\n").expect("write");

    let matcher = matcher_for(temp.path(), &PatternOptions::new());
    assert!(matcher.is_ignored(Path::new("node_modules")));
    assert!(matcher.is_ignored(Path::new("node_modules/pkg/file.ts")));
    assert!(matcher.is_ignored(Path::new("packages/a/node_modules")));
    assert!(!matcher.is_ignored(Path::new("src/file.ts")));
    assert!(matcher.is_ignored(&temp.path().join("node_modules")));
}

#[test]
fn unignore_line_rescues_file_inside_ignored_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "build/**\n!build/keep.txt\n").expect("write");

    let matcher = matcher_for(temp.path(), &PatternOptions::new());
    assert!(matcher.is_ignored(Path::new("build/tmp.o")));
    assert!(!matcher.is_ignored(Path::new("build/keep.txt")));
}

#[test]
fn caller_unignore_overrides_ignore_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".gitignore"), "*.ts\n").expect("write");

    let options = PatternOptions::new().with_unignore(["**/index.ts"]);
    let matcher = matcher_for(temp.path(), &options);
    assert!(matcher.is_ignored(Path::new("src/util.ts")));
    assert!(!matcher.is_ignored(Path::new("src/index.ts")));
}
