#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `project` decides which files under a directory belong to a project. It
//! combines three sources of rules:
//!
//! - ignore patterns from the root's `.gitignore` plus caller `ignore` and
//!   `unignore` lists (see the `filters` crate);
//! - inclusion rules derived from the root's `package.json` (`files`,
//!   `directories`, `main`, `bin`, `workspaces`);
//! - caller glob patterns and an extension allow-list.
//!
//! # Design
//!
//! [`MatcherSet`] compiles everything once. Its
//! [`directory_is_match`](MatcherSet::directory_is_match) verdict decides
//! whether a directory is kept and descended into, and
//! [`file_is_match`](MatcherSet::file_is_match) decides whether a file is
//! returned. [`project_files_with`] drives the `walk` crate with those
//! verdicts and hands kept entries to caller [`EntryHooks`]; a directory hook
//! may veto descent by clearing `entry.verdict.recurse`.
//!
//! # Invariants
//!
//! - A file whose extension is not allowed is never returned.
//! - A manifest declaring nothing behaves exactly like a missing manifest.
//! - Entries beneath a directory whose `recurse` flag ends up cleared are
//!   never visited.
//!
//! # Errors
//!
//! [`ProjectError`] wraps pattern compilation, ignore-file, manifest and
//! traversal failures. Missing ignore files and manifests are not errors.

mod error;
mod hooks;
mod inclusion;
mod matchers;
mod options;
mod orchestrator;

pub use error::ProjectError;
pub use hooks::{EntryHooks, NoHooks};
pub use inclusion::{
    InclusionRule, derive_inclusion_rules, is_included, load_inclusion_rules, workspace_glob,
};
pub use matchers::MatcherSet;
pub use options::{DEFAULT_EXTENSIONS, Extensions, ProjectOptions};
pub use orchestrator::{project_files, project_files_with};
pub use walk::{EntryKind, Verdict, WalkEntry};
