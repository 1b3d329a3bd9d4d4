use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem failure that stopped a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The walk root could not be inspected.
    #[error("cannot walk '{}': {source}", path.display())]
    Root {
        /// Absolute walk root.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The walk root exists but is not a directory.
    #[error("cannot walk '{}': not a directory", path.display())]
    NotADirectory {
        /// Absolute walk root.
        path: PathBuf,
    },
    /// A directory scheduled for descent could not be listed.
    #[error("cannot list '{}': {source}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// An entry disappeared or became unreadable between listing and visiting.
    #[error("cannot stat '{}': {source}", path.display())]
    Metadata {
        /// Entry path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A relative root or base could not be resolved.
    #[error("cannot resolve '{}' against the working directory: {source}", path.display())]
    CurrentDir {
        /// Relative path being resolved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Returns the path the failure refers to.
    ///
    /// ```
    /// use walk::{WalkBuilder, WalkError};
    ///
    /// let Err(error) = WalkBuilder::new("/definitely/missing/root").build() else {
    ///     panic!("missing root yields error");
    /// };
    /// assert!(matches!(error, WalkError::Root { .. }));
    /// assert!(error.path().ends_with("root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Root { path, .. }
            | Self::NotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::CurrentDir { path, .. } => path,
        }
    }
}
