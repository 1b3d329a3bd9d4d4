use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Kind of filesystem entry reported by the walker.
///
/// Symbolic links are never followed and are reported as files.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntryKind {
    /// Regular file, symlink, or any other non-directory entry.
    File,
    /// Directory.
    Directory,
}

/// Keep and descend decision for a directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Verdict {
    /// Whether the directory itself is part of the result.
    pub keep: bool,
    /// Whether the walker descends into the directory.
    pub recurse: bool,
}

impl Verdict {
    /// Returns a verdict with `keep` and `recurse` both set to `value`.
    #[must_use]
    pub const fn both(value: bool) -> Self {
        Self {
            keep: value,
            recurse: value,
        }
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::both(true)
    }
}

/// Entry handed to a [`crate::WalkVisitor`].
///
/// The public flags are owned by visitors: the walker initialises them and
/// then only reads them back.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WalkEntry {
    #[cfg_attr(feature = "serde", serde(rename = "path"))]
    full_path: PathBuf,
    #[cfg_attr(feature = "serde", serde(rename = "relative"))]
    relative_path: PathBuf,
    kind: EntryKind,
    #[cfg_attr(feature = "serde", serde(skip))]
    depth: usize,
    /// Directory keep/recurse decision.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub verdict: Verdict,
    /// Set when the walker filter rejected the entry.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub skip: bool,
    /// Excludes the entry; on a directory it propagates to every descendant.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub ignore: bool,
}

impl WalkEntry {
    /// Creates a depth-one entry with default flags.
    ///
    /// Mostly useful for exercising predicates without touching the
    /// filesystem.
    #[must_use]
    pub fn new<F, R>(full_path: F, relative_path: R, kind: EntryKind) -> Self
    where
        F: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        Self {
            full_path: full_path.into(),
            relative_path: relative_path.into(),
            kind,
            depth: 1,
            verdict: Verdict::default(),
            skip: false,
            ignore: false,
        }
    }

    pub(crate) fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Returns the absolute path to the filesystem entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the walk base.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the final component of the entry's path.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::{EntryKind, WalkEntry};
    ///
    /// let entry = WalkEntry::new("/repo/src/index.ts", "src/index.ts", EntryKind::File);
    /// assert_eq!(entry.file_name(), "index.ts");
    /// assert_eq!(entry.extension(), Some("ts"));
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        self.full_path.file_name().unwrap_or_default()
    }

    /// Returns the extension without the leading dot, if it is valid UTF-8.
    ///
    /// Dotfiles such as `.eslintrc` have no extension.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.full_path.extension().and_then(OsStr::to_str)
    }

    /// Reports whether this is a file or a directory.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for non-directory entries.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    /// Returns `true` for directories.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Reports the depth of the entry below the root (children of the root
    /// are at depth `1`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}
