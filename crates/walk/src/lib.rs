#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic directory traversal behind
//! project-files. Entries are handed to a [`WalkVisitor`] in depth-first
//! order with siblings sorted lexicographically, so the result of a walk does
//! not depend on the order the filesystem returns directory entries in.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the root, the base directory relative paths
//!   are computed against, and an optional readdir-style filter.
//! - [`Walker::walk`] drives a [`WalkVisitor`]. Directories are offered by
//!   mutable reference so the visitor can veto descent through
//!   [`Verdict::recurse`] or exclude a whole subtree via
//!   [`WalkEntry::ignore`].
//! - [`WalkError`] describes I/O failures and always carries the offending
//!   path.
//!
//! # Invariants
//!
//! - The root itself is never reported; traversal starts with its children.
//! - A directory whose `recurse` flag is cleared is never read.
//! - Symbolic links are reported as [`EntryKind::File`] and never followed,
//!   so traversal cannot cycle.
//! - `ignore` set on a directory is inherited by every entry beneath it.
//!
//! # Errors
//!
//! The first filesystem failure stops the walk and is returned as
//! [`WalkError`]. Its variant names the step that failed, and every variant
//! except [`WalkError::NotADirectory`] keeps the underlying
//! [`std::io::Error`] as its source.
//!
//! # Examples
//!
//! ```
//! use std::fs;
//! use std::path::PathBuf;
//! use walk::{WalkBuilder, WalkEntry, WalkVisitor};
//!
//! struct Collect(Vec<PathBuf>);
//!
//! impl WalkVisitor for Collect {
//!     fn visit_directory(&mut self, entry: &mut WalkEntry) {
//!         entry.verdict.recurse = entry.file_name() != "node_modules";
//!     }
//!
//!     fn visit_file(&mut self, entry: WalkEntry) {
//!         self.0.push(entry.relative_path().to_path_buf());
//!     }
//! }
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir_all(temp.path().join("src"))?;
//! fs::create_dir_all(temp.path().join("node_modules/dep"))?;
//! fs::write(temp.path().join("src/index.js"), b"")?;
//! fs::write(temp.path().join("node_modules/dep/index.js"), b"")?;
//!
//! let mut collect = Collect(Vec::new());
//! WalkBuilder::new(temp.path()).build()?.walk(&mut collect)?;
//! assert_eq!(collect.0, vec![PathBuf::from("src/index.js")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::{EntryFilter, WalkBuilder};
pub use entry::{EntryKind, Verdict, WalkEntry};
pub use error::WalkError;
pub use walker::{WalkVisitor, Walker, absolutize};
