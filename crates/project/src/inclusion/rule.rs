use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::GlobMatcher;
use logging::trace_rules;
use manifest::{Manifest, load_manifest};
use walk::WalkEntry;

use crate::ProjectError;

/// One manifest-declared inclusion, classified once from filesystem
/// metadata.
#[derive(Clone, Debug)]
pub enum InclusionRule {
    /// An existing non-directory path.
    File {
        /// Absolute path below the root.
        path: PathBuf,
        /// Path as declared, relative to the root.
        relative: PathBuf,
    },
    /// An existing directory; everything strictly inside it is included.
    Directory {
        /// Absolute path below the root.
        path: PathBuf,
        /// Path as declared, relative to the root.
        relative: PathBuf,
    },
    /// A path that does not exist, treated as a glob.
    Glob {
        /// Glob source text.
        pattern: String,
        /// Compiled matcher.
        matcher: GlobMatcher,
    },
}

impl InclusionRule {
    /// Classifies `declared` from the metadata of `root.join(declared)`.
    ///
    /// A leading `./` is ignored. Paths that do not exist become globs; any
    /// other metadata failure is [`ProjectError::UnresolvedRule`].
    pub fn resolve(root: &Path, declared: &str) -> Result<Self, ProjectError> {
        let relative = strip_dot_slash(declared);
        let path = root.join(relative);
        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => Ok(Self::Directory {
                path,
                relative: PathBuf::from(relative),
            }),
            Ok(_) => Ok(Self::File {
                path,
                relative: PathBuf::from(relative),
            }),
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Self::glob(relative)
            }
            Err(source) => Err(ProjectError::UnresolvedRule { path, source }),
        }
    }

    /// Compiles `pattern` into a [`InclusionRule::Glob`].
    pub fn glob(pattern: &str) -> Result<Self, ProjectError> {
        let matcher = filters::compile_matcher(pattern)?;
        Ok(Self::Glob {
            pattern: pattern.to_owned(),
            matcher,
        })
    }

    /// Returns `true` when the rule admits `entry`.
    ///
    /// File rules compare the entry's relative path, directory rules its
    /// absolute path, glob rules test the relative path.
    #[must_use]
    pub fn matches(&self, entry: &WalkEntry) -> bool {
        match self {
            Self::File { relative, .. } => entry.is_file() && entry.relative_path() == relative,
            Self::Directory { path, .. } => {
                entry.full_path() != path && entry.full_path().starts_with(path)
            }
            Self::Glob { matcher, .. } => matcher.is_match(entry.relative_path()),
        }
    }
}

/// Rewrites a workspace declaration into a glob; a trailing `/*` becomes
/// `/**` so whole packages are covered.
///
/// ```
/// assert_eq!(project::workspace_glob("packages/*"), "packages/**");
/// assert_eq!(project::workspace_glob("./apps/web"), "apps/web");
/// ```
#[must_use]
pub fn workspace_glob(pattern: &str) -> String {
    let pattern = strip_dot_slash(pattern);
    match pattern.strip_suffix("/*") {
        Some(prefix) => format!("{prefix}/**"),
        None => pattern.to_owned(),
    }
}

/// Builds one rule per path the manifest declares.
pub fn derive_inclusion_rules(
    root: &Path,
    manifest: &Manifest,
) -> Result<Vec<InclusionRule>, ProjectError> {
    let mut rules = Vec::new();
    let declared = manifest
        .files()
        .chain(manifest.directories())
        .chain(manifest.main())
        .chain(manifest.bins());
    for path in declared {
        rules.push(InclusionRule::resolve(root, path)?);
    }
    for pattern in manifest.workspaces() {
        rules.push(InclusionRule::glob(&workspace_glob(pattern))?);
    }

    trace_rules!("derived {} inclusion rules", rules.len());
    Ok(rules)
}

/// Loads `root/manifest_name` and derives its rules; a missing manifest or
/// one that declares no paths yields no rules.
pub fn load_inclusion_rules(
    root: &Path,
    manifest_name: &str,
) -> Result<Vec<InclusionRule>, ProjectError> {
    match load_manifest(root, manifest_name)? {
        Some(manifest) if manifest.is_empty() => {
            trace_rules!("{manifest_name} declares no paths");
            Ok(Vec::new())
        }
        Some(manifest) => derive_inclusion_rules(root, &manifest),
        None => Ok(Vec::new()),
    }
}

fn strip_dot_slash(mut path: &str) -> &str {
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}
