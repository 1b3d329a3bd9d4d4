use std::fs;
use std::io;
use std::path::Path;

use logging::trace_rules;

use crate::error::ManifestError;
use crate::package::Manifest;

/// Manifest file name read when none is configured.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Reads and decodes `root/name`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_manifest(root: &Path, name: &str) -> Result<Option<Manifest>, ManifestError> {
    let path = root.join(name);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            trace_rules!("no manifest at {}", path.display());
            return Ok(None);
        }
        Err(source) => return Err(ManifestError::Read { path, source }),
    };

    let manifest = Manifest::from_slice(&bytes).map_err(|source| ManifestError::Decode {
        path: path.clone(),
        source,
    })?;
    trace_rules!("loaded manifest {}", path.display());
    Ok(Some(manifest))
}
