use std::fmt;
use std::path::{Path, PathBuf};

use filters::{DEFAULT_IGNORE_FILE, PatternOptions};
use manifest::DEFAULT_MANIFEST;
use walk::{EntryFilter, WalkEntry};

/// Extensions accepted when none are configured.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".jsx", ".js", ".mjs", ".ts", ".tsx"];

/// Allow-list of file extensions, stored without the leading dot.
///
/// `".ts"` and `"ts"` are the same entry. An empty string admits files that
/// have no extension.
///
/// # Examples
///
/// ```
/// use project::Extensions;
///
/// let exts = Extensions::new([".md", "json"]);
/// assert!(exts.contains(Some("md")));
/// assert!(exts.contains(Some("json")));
/// assert!(!exts.contains(Some("js")));
/// assert!(!exts.contains(None));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "manifest::OneOrMany"))]
pub struct Extensions(Vec<String>);

impl Extensions {
    /// Builds an allow-list, normalising and deduplicating the entries.
    pub fn new<I>(extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for extension in extensions {
            let extension = extension.as_ref();
            let extension = extension.strip_prefix('.').unwrap_or(extension);
            if !normalized.iter().any(|existing| existing == extension) {
                normalized.push(extension.to_owned());
            }
        }
        Self(normalized)
    }

    /// Returns `true` when `extension` (as reported by
    /// [`WalkEntry::extension`]) is allowed.
    #[must_use]
    pub fn contains(&self, extension: Option<&str>) -> bool {
        let extension = extension.unwrap_or_default();
        self.0.iter().any(|allowed| allowed == extension)
    }

    /// Iterates over the normalised entries.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` when nothing is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Extensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<manifest::OneOrMany> for Extensions {
    fn from(value: manifest::OneOrMany) -> Self {
        Self::new(value.iter())
    }
}

/// Options for a project walk.
///
/// Hooks are supplied separately through [`crate::EntryHooks`].
///
/// # Examples
///
/// ```
/// use project::ProjectOptions;
///
/// let options = ProjectOptions::new()
///     .with_pattern("src/**")
///     .with_ignore(["fixtures"])
///     .with_exts([".ts"]);
/// assert_eq!(options.patterns(), ["src/**"]);
/// assert!(options.exts().contains(Some("ts")));
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectOptions {
    #[cfg_attr(
        feature = "serde",
        serde(alias = "pattern", deserialize_with = "one_or_many")
    )]
    patterns: Vec<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "one_or_many"))]
    ignore: Vec<String>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "one_or_many"))]
    unignore: Vec<String>,
    exts: Extensions,
    cwd: Option<PathBuf>,
    include_dirs: bool,
    ignore_file: String,
    manifest: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    filter: Option<EntryFilter>,
}

#[cfg(feature = "serde")]
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    <manifest::OneOrMany as serde::Deserialize>::deserialize(deserializer).map(Vec::from)
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            ignore: Vec::new(),
            unignore: Vec::new(),
            exts: Extensions::default(),
            cwd: None,
            include_dirs: false,
            ignore_file: DEFAULT_IGNORE_FILE.to_owned(),
            manifest: DEFAULT_MANIFEST.to_owned(),
            filter: None,
        }
    }
}

impl ProjectOptions {
    /// Creates options with the default extension list, `.gitignore` and
    /// `package.json`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one caller pattern; files must match at least one.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Adds caller patterns.
    #[must_use]
    pub fn with_patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds ignore patterns.
    #[must_use]
    pub fn with_ignore<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds un-ignore patterns.
    #[must_use]
    pub fn with_unignore<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.unignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Replaces the extension allow-list.
    #[must_use]
    pub fn with_exts<I>(mut self, exts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.exts = Extensions::new(exts);
        self
    }

    /// Computes relative paths against `cwd` instead of the root.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Also returns kept directories.
    #[must_use]
    pub const fn include_dirs(mut self, include: bool) -> Self {
        self.include_dirs = include;
        self
    }

    /// Sets the ignore file name read from the root.
    #[must_use]
    pub fn with_ignore_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_file = name.into();
        self
    }

    /// Sets the manifest file name read from the root.
    #[must_use]
    pub fn with_manifest(mut self, name: impl Into<String>) -> Self {
        self.manifest = name.into();
        self
    }

    /// Installs a walker filter; entries it rejects are marked `skip` and
    /// never kept as files.
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&WalkEntry) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(std::sync::Arc::new(filter));
        self
    }

    /// Caller patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Ignore patterns.
    #[must_use]
    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    /// Un-ignore patterns.
    #[must_use]
    pub fn unignore(&self) -> &[String] {
        &self.unignore
    }

    /// Extension allow-list.
    #[must_use]
    pub fn exts(&self) -> &Extensions {
        &self.exts
    }

    /// Base directory for relative paths, if set.
    #[must_use]
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Whether kept directories are returned.
    #[must_use]
    pub const fn includes_dirs(&self) -> bool {
        self.include_dirs
    }

    /// Ignore file name.
    #[must_use]
    pub fn ignore_file(&self) -> &str {
        &self.ignore_file
    }

    /// Manifest file name.
    #[must_use]
    pub fn manifest(&self) -> &str {
        &self.manifest
    }

    pub(crate) fn filter(&self) -> Option<&EntryFilter> {
        self.filter.as_ref()
    }

    /// Inputs for [`filters::partition_patterns`].
    #[must_use]
    pub fn pattern_options(&self) -> PatternOptions {
        PatternOptions::new()
            .with_ignore(self.ignore.iter().cloned())
            .with_unignore(self.unignore.iter().cloned())
            .with_ignore_file(self.ignore_file.clone())
    }
}

impl fmt::Debug for ProjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectOptions")
            .field("patterns", &self.patterns)
            .field("ignore", &self.ignore)
            .field("unignore", &self.unignore)
            .field("exts", &self.exts)
            .field("cwd", &self.cwd)
            .field("include_dirs", &self.include_dirs)
            .field("ignore_file", &self.ignore_file)
            .field("manifest", &self.manifest)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}
