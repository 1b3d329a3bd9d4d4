//! crates/logging/src/verbosity.rs
//! Mapping from `-v` counts to tracing filter directives.

use std::fmt;

use crate::TARGET_ROOT;

/// How much of the workspace's own diagnostics reach the subscriber.
///
/// Events from other crates are always limited to warnings.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Quiet,
    /// Informational events.
    Verbose,
    /// Rule construction and filter diagnostics.
    Debug,
    /// Per-entry traversal decisions.
    Trace,
}

impl Verbosity {
    /// Maps the number of `-v` flags onto a level (saturating at
    /// [`Verbosity::Trace`]).
    #[must_use]
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Quiet,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the `EnvFilter` directive for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// assert_eq!(Verbosity::Quiet.directive(), "warn");
    /// assert_eq!(Verbosity::Debug.directive(), "warn,project_files=debug");
    /// ```
    #[must_use]
    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => return "warn".to_owned(),
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        format!("warn,{TARGET_ROOT}={level}")
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => f.write_str("quiet"),
            Self::Verbose => f.write_str("verbose"),
            Self::Debug => f.write_str("debug"),
            Self::Trace => f.write_str("trace"),
        }
    }
}
