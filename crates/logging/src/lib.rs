#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises diagnostics for the project-files workspace. Every
//! crate emits events through the target-specific macros exported here so a
//! single `EnvFilter` directive can enable one subsystem without the others.
//!
//! # Design
//!
//! - [`trace_filter!`], [`trace_rules!`] and [`trace_walk!`] wrap the
//!   standard [`tracing`] macros with fixed targets under
//!   [`TARGET_ROOT`].
//! - [`Verbosity`] maps a `-v` count onto a filter directive.
//! - [`init_tracing`] installs a stderr `fmt` subscriber honouring
//!   `RUST_LOG` when it is set.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, init_tracing, trace_walk};
//!
//! init_tracing(Verbosity::from_count(2));
//! trace_walk!("visiting {}", "src");
//! ```

mod subscriber;
mod tracing_macros;
mod verbosity;

pub use subscriber::{env_filter, init_tracing};
pub use verbosity::Verbosity;

/// Prefix shared by every tracing target in the workspace.
pub const TARGET_ROOT: &str = "project_files";

/// Target used by ignore-pattern diagnostics.
pub const FILTER_TARGET: &str = "project_files::filter";

/// Target used by manifest and inclusion-rule diagnostics.
pub const RULES_TARGET: &str = "project_files::rules";

/// Target used by traversal and keep/prune diagnostics.
pub const WALK_TARGET: &str = "project_files::walk";
