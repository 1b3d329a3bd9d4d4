#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `manifest` decodes the subset of a `package.json` that decides which files
//! belong to a project: `files`, `directories`, `main`, `bin` and
//! `workspaces`. Every other field is ignored.
//!
//! # Design
//!
//! [`Manifest`] mirrors the loose shapes npm accepts. `files` may be one
//! string or a list, `directories` may also be an npm-style name to path map,
//! `bin` a string or a name to path map, and `workspaces` a list or the
//! `{ "packages": [...] }` object. Accessors flatten those shapes into plain
//! path iterators so callers never match on the JSON layout.
//!
//! # Errors
//!
//! [`load_manifest`] treats a missing file as "no manifest" and reports read
//! and decode failures through [`ManifestError`], which always names the
//! offending path.
//!
//! # Examples
//!
//! ```
//! use manifest::Manifest;
//!
//! let manifest: Manifest = r#"{
//!     "main": "index.js",
//!     "bin": { "tool": "./bin/tool.js" },
//!     "workspaces": ["packages/*"]
//! }"#
//! .parse()
//! .unwrap();
//!
//! assert_eq!(manifest.main(), Some("index.js"));
//! assert_eq!(manifest.bins(), vec!["./bin/tool.js"]);
//! assert_eq!(manifest.workspaces().collect::<Vec<_>>(), vec!["packages/*"]);
//! ```

mod error;
mod load;
mod package;

pub use error::ManifestError;
pub use load::{DEFAULT_MANIFEST, load_manifest};
pub use package::{Directories, Manifest, OneOrMany, Workspaces};
