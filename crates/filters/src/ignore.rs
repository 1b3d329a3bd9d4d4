use std::path::{Path, PathBuf};

use globset::GlobSet;
use logging::trace_filter;

use crate::compile::compile_set;
use crate::{FilterError, PatternSet};

/// Compiled ignore predicate with un-ignore overrides.
///
/// A path is ignored when it matches at least one positive pattern and no
/// negative pattern. Built from an empty [`PatternSet`] the matcher is the
/// constant `false` predicate and never consults a glob.
///
/// Probes may be relative to the root or absolute. Absolute paths inside the
/// root are matched by their root-relative form; any other path is matched
/// as given. The root itself is never ignored.
///
/// # Examples
///
/// ```
/// use filters::{IgnoreMatcher, PatternSet};
/// use std::path::Path;
///
/// let set = PatternSet::from_parts(["build/**"], ["build/keep.txt"]);
/// let matcher = IgnoreMatcher::new("/repo", &set).unwrap();
///
/// assert!(matcher.is_ignored(Path::new("build/tmp.o")));
/// assert!(!matcher.is_ignored(Path::new("build/keep.txt")));
/// assert!(matcher.is_ignored(Path::new("/repo/build/tmp.o")));
/// ```
#[derive(Clone, Debug)]
pub struct IgnoreMatcher {
    root: PathBuf,
    mode: Mode,
}

#[derive(Clone, Debug)]
enum Mode {
    Never,
    Globs { positive: GlobSet, negative: GlobSet },
}

impl IgnoreMatcher {
    /// Returns a matcher that ignores nothing.
    #[must_use]
    pub fn never(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mode: Mode::Never,
        }
    }

    /// Compiles `patterns` into a matcher anchored at `root`.
    ///
    /// `root` should be absolute so absolute paths can be related to it.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] naming the first pattern that is not a valid
    /// glob.
    pub fn new(root: impl Into<PathBuf>, patterns: &PatternSet) -> Result<Self, FilterError> {
        let root = root.into();
        if patterns.is_empty() {
            return Ok(Self::never(root));
        }

        let positive = compile_set(patterns.positive())?;
        let negative = compile_set(patterns.negative())?;
        trace_filter!(
            "compiled ignore matcher for {} ({} ignore, {} unignore)",
            root.display(),
            patterns.positive().len(),
            patterns.negative().len()
        );

        Ok(Self {
            root,
            mode: Mode::Globs { positive, negative },
        })
    }

    /// Returns `true` when the matcher is the constant `false` predicate.
    #[must_use]
    pub const fn is_never(&self) -> bool {
        matches!(self.mode, Mode::Never)
    }

    /// Returns the root that absolute paths are related to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `true` if `path` is ignored.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Mode::Globs { positive, negative } = &self.mode else {
            return false;
        };

        let candidate = self.candidate(path);
        if candidate.as_os_str().is_empty() {
            return false;
        }

        positive.is_match(candidate) && !negative.is_match(candidate)
    }

    fn candidate<'a>(&self, path: &'a Path) -> &'a Path {
        if path.is_absolute() {
            path.strip_prefix(&self.root).unwrap_or(path)
        } else {
            path
        }
    }
}
