use assert_cmd::Command;
use predicates::prelude::*;
use test_support::{FileTree, TestDir};

fn project_files() -> Command {
    Command::cargo_bin("project-files").expect("project-files binary is built")
}

fn sample_project() -> TestDir {
    TestDir::with_tree(
        &FileTree::new()
            .file(
                "package.json",
                r#"{ "main": "index.js", "workspaces": ["packages/*"] }"#,
            )
            .file(".gitignore", "node_modules/\n*.log\n")
            .file("index.js", "")
            .file("scripts/build.js", "")
            .file("packages/ui/src/button.tsx", "")
            .file("packages/ui/README.md", "")
            .file("node_modules/dep/index.js", ""),
    )
}

#[test]
fn help_lists_usage() {
    project_files()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains("Usage:").and(predicate::str::contains("project-files")));
}

#[test]
fn unknown_flag_exits_with_usage_status() {
    project_files()
        .arg("--definitely-not-a-flag")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--definitely-not-a-flag"));
}

#[test]
fn lists_manifest_and_workspace_files() {
    let dir = sample_project();
    project_files()
        .arg(dir.path())
        .assert()
        .success()
        .stdout("index.js\npackages/ui/src/button.tsx\n");
}

#[test]
fn current_directory_is_the_default_root() {
    let dir = sample_project();
    project_files()
        .current_dir(dir.path())
        .args(["--pattern", "packages/**"])
        .assert()
        .success()
        .stdout("packages/ui/src/button.tsx\n");
}

#[test]
fn extensions_replace_the_default_list() {
    let dir = sample_project();
    project_files()
        .arg(dir.path())
        .args(["--ext", ".md", "--ignore", "scripts"])
        .assert()
        .success()
        .stdout("packages/ui/README.md\n");
}

#[test]
fn json_output_describes_entries() {
    let dir = sample_project();
    let output = project_files()
        .arg(dir.path())
        .arg("--json")
        .output()
        .expect("run project-files");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["relative"], "index.js");
    assert_eq!(entries[0]["kind"], "file");
    assert!(
        entries[0]["path"]
            .as_str()
            .is_some_and(|path| path.ends_with("index.js"))
    );
}

#[test]
fn malformed_manifest_is_a_runtime_error() {
    let dir = TestDir::with_tree(&FileTree::new().file("package.json", "{ nope"));
    project_files()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("project-files: error: "));
}
