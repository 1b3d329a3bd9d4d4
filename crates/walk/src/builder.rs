use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::walker::Walker;

/// Predicate consulted for every entry before it reaches the visitor.
///
/// Entries for which the filter returns `false` are still visited, but carry
/// `skip = true`.
pub type EntryFilter = Arc<dyn Fn(&WalkEntry) -> bool + Send + Sync>;

/// Configures a filesystem traversal rooted at a specific path.
#[derive(Clone)]
pub struct WalkBuilder {
    root: PathBuf,
    base: Option<PathBuf>,
    filter: Option<EntryFilter>,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            base: None,
            filter: None,
        }
    }

    /// Sets the directory that [`WalkEntry::relative_path`] is computed
    /// against. Defaults to the root.
    ///
    /// Entries outside the base fall back to root-relative paths.
    #[must_use]
    pub fn base<P: Into<PathBuf>>(mut self, base: P) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Installs a readdir-style filter that marks rejected entries as skipped.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&WalkEntry) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Builds a [`Walker`] using the configured options.
    ///
    /// Relative root and base paths are resolved against the current working
    /// directory. The root must exist and be a directory.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::new(self.root, self.base, self.filter)
    }
}

impl fmt::Debug for WalkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkBuilder")
            .field("root", &self.root)
            .field("base", &self.base)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}
