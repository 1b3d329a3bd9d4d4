use std::io;
use std::path::PathBuf;

use filters::{FilterError, PartitionError};
use manifest::ManifestError;
use thiserror::Error;
use walk::WalkError;

/// Failure while building matchers or walking a project.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A caller, manifest, or ignore-file pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] FilterError),
    /// The ignore file could not be read.
    #[error(transparent)]
    Partition(#[from] PartitionError),
    /// The manifest could not be read or decoded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// Probing a manifest-declared path failed for a reason other than the
    /// path not existing.
    #[error("failed to resolve manifest path '{}': {source}", path.display())]
    UnresolvedRule {
        /// Absolute path whose metadata could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Traversal failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
}
