use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to load a manifest that exists on disk.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be read.
    #[error("failed to read manifest '{}': {source}", path.display())]
    Read {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The manifest is not valid JSON or has an unexpected shape.
    #[error("failed to parse manifest '{}': {source}", path.display())]
    Decode {
        /// Manifest path.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Returns the manifest path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}
