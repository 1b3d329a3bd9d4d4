use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error produced when a pattern cannot be compiled into a matcher.
#[derive(Debug)]
pub struct FilterError {
    pattern: String,
    source: globset::Error,
}

impl FilterError {
    /// Creates a new [`FilterError`] for the given pattern and source error.
    pub(crate) fn new(pattern: String, source: globset::Error) -> Self {
        Self { pattern, source }
    }

    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to compile pattern '{}': {}",
            self.pattern, self.source
        )
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error returned by [`partition_patterns`](crate::partition_patterns).
///
/// A missing ignore file is not an error; only read failures on an ignore
/// file that exists end up here.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    /// The ignore file exists but could not be read.
    #[error("failed to read ignore file '{}': {source}", path.display())]
    IgnoreFile {
        /// Path of the ignore file.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl PartitionError {
    /// Returns the filesystem path associated with the error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::IgnoreFile { path, .. } => path,
        }
    }
}
