#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` turns the ignore sources of a project tree into a single
//! negation-aware predicate. Two sources contribute patterns: the ignore file
//! at the walk root (`.gitignore` by default) and the caller's own `ignore` /
//! `unignore` lists. Only two classes of pattern exist: ignore and un-ignore.
//! Precedence by position within the ignore file is not modelled; un-ignore
//! patterns always win.
//!
//! # Design
//!
//! - [`partition_patterns`] reads the ignore file through
//!   [`read_ignore_file`] and merges its groups with the caller lists into a
//!   deduplicated [`PatternSet`].
//! - [`IgnoreMatcher`] compiles a [`PatternSet`] into two [`globset::GlobSet`]
//!   values. An empty set produces the constant `false` predicate without
//!   compiling anything.
//! - [`compile_matcher`] and [`compile_set`] are the glob compilers shared
//!   with the rest of the workspace so every matcher agrees on separator and
//!   escape semantics.
//!
//! # Invariants
//!
//! - A path is ignored iff it matches a positive pattern and no negative
//!   pattern.
//! - A missing ignore file contributes nothing and is not an error.
//! - `*` and `?` never match `/`; only `**` crosses directory boundaries.
//!
//! # Errors
//!
//! [`FilterError`] reports a pattern that is not a valid glob together with
//! the underlying [`globset::Error`]. [`PartitionError`] reports an ignore
//! file that exists but cannot be read.
//!
//! # Examples
//!
//! ```
//! use filters::{IgnoreMatcher, PatternOptions, partition_patterns};
//! use std::path::Path;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::write(temp.path().join(".gitignore"), "node_modules/\n")?;
//!
//! let set = partition_patterns(temp.path(), &PatternOptions::new())?;
//! let ignored = IgnoreMatcher::new(temp.path(), &set)?;
//!
//! assert!(ignored.is_ignored(Path::new("node_modules/pkg/index.js")));
//! assert!(!ignored.is_ignored(Path::new("src/index.js")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod compile;
mod error;
mod ignore;
pub mod ignore_file;
mod partition;
mod pattern_set;

pub use compile::{compile_matcher, compile_set};
pub use error::{FilterError, PartitionError};
pub use ignore::IgnoreMatcher;
pub use ignore_file::{
    DEFAULT_IGNORE_FILE, IgnoreGroup, IgnoreKind, parse_ignore_file, read_ignore_file,
};
pub use partition::{PatternOptions, partition_patterns};
pub use pattern_set::PatternSet;

#[cfg(test)]
mod tests;
