use std::path::Path;

use logging::trace_filter;

use crate::ignore_file::{DEFAULT_IGNORE_FILE, IgnoreKind, read_ignore_file};
use crate::{PartitionError, PatternSet};

/// Caller-supplied inputs to [`partition_patterns`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternOptions {
    ignore: Vec<String>,
    unignore: Vec<String>,
    ignore_file: String,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            unignore: Vec::new(),
            ignore_file: DEFAULT_IGNORE_FILE.to_owned(),
        }
    }
}

impl PatternOptions {
    /// Creates options with no caller patterns that read `.gitignore`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds caller ignore patterns.
    #[must_use]
    pub fn with_ignore<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds caller un-ignore patterns.
    #[must_use]
    pub fn with_unignore<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.unignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the name of the ignore file looked up in the root directory.
    #[must_use]
    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Returns the caller ignore patterns.
    #[must_use]
    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    /// Returns the caller un-ignore patterns.
    #[must_use]
    pub fn unignore(&self) -> &[String] {
        &self.unignore
    }

    /// Returns the ignore file name.
    #[must_use]
    pub fn ignore_file(&self) -> &str {
        &self.ignore_file
    }
}

/// Merges the root's ignore file with the caller's pattern lists.
///
/// Caller `ignore` patterns and ignore-file lines without `!` land in
/// [`PatternSet::positive`]; caller `unignore` patterns and `!` lines land in
/// [`PatternSet::negative`]. When the ignore file is absent and the caller
/// supplied no patterns the empty set is returned straight away.
///
/// # Errors
///
/// Returns [`PartitionError::IgnoreFile`] when the ignore file exists but
/// cannot be read.
///
/// # Examples
///
/// ```
/// use filters::{PatternOptions, partition_patterns};
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(temp.path().join(".gitignore"), "dist/\n!dist/keep.js\n")?;
///
/// let options = PatternOptions::new().with_ignore(["coverage"]);
/// let set = partition_patterns(temp.path(), &options)?;
/// assert_eq!(set.positive(), ["coverage", "**/dist", "**/dist/**"]);
/// assert_eq!(set.negative(), ["dist/keep.js", "dist/keep.js/**"]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn partition_patterns(
    root: &Path,
    options: &PatternOptions,
) -> Result<PatternSet, PartitionError> {
    let ignore_path = root.join(options.ignore_file());
    let groups =
        read_ignore_file(&ignore_path).map_err(|source| PartitionError::IgnoreFile {
            path: ignore_path.clone(),
            source,
        })?;

    if groups.is_none() && options.ignore.is_empty() && options.unignore.is_empty() {
        trace_filter!("no ignore sources under {}", root.display());
        return Ok(PatternSet::new());
    }

    let mut set = PatternSet::new();
    set.extend_positive(options.ignore.iter().cloned());
    set.extend_negative(options.unignore.iter().cloned());

    if let Some(groups) = groups {
        trace_filter!(
            "read {} pattern lines from {}",
            groups.len(),
            ignore_path.display()
        );
        for group in groups {
            match group.kind {
                IgnoreKind::Ignore => set.extend_positive(group.patterns),
                IgnoreKind::Unignore => set.extend_negative(group.patterns),
            }
        }
    }

    trace_filter!(
        "partitioned {} ignore and {} unignore patterns",
        set.positive().len(),
        set.negative().len()
    );
    Ok(set)
}
