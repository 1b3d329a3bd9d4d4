use std::path::{Path, PathBuf};

use filters::{IgnoreMatcher, partition_patterns};
use globset::GlobSet;
use logging::trace_filter;
use walk::WalkEntry;

use crate::inclusion::{InclusionRule, is_included, load_inclusion_rules};
use crate::{Extensions, ProjectError, ProjectOptions};

/// Compiled keep/prune predicates for one project walk.
///
/// Built once from the root's ignore file, manifest and the caller's
/// options; read-only afterwards.
#[derive(Clone, Debug)]
pub struct MatcherSet {
    root: PathBuf,
    ignore: IgnoreMatcher,
    rules: Vec<InclusionRule>,
    exts: Extensions,
    patterns: Option<GlobSet>,
}

impl MatcherSet {
    /// Reads the ignore file and manifest under `root` and compiles every
    /// pattern.
    ///
    /// A relative `root` is resolved against the current directory.
    pub fn build(root: &Path, options: &ProjectOptions) -> Result<Self, ProjectError> {
        let root = walk::absolutize(root.to_path_buf())?;

        let pattern_set = partition_patterns(&root, &options.pattern_options())?;
        let ignore = IgnoreMatcher::new(root.clone(), &pattern_set)?;
        trace_filter!(
            "{} ignore and {} un-ignore patterns",
            pattern_set.positive().len(),
            pattern_set.negative().len()
        );

        let exts = options.exts().clone();
        if exts.is_empty() {
            tracing::warn!(
                target: logging::FILTER_TARGET,
                "no extension is allowed, every file will be dropped"
            );
        } else {
            trace_filter!(
                "allowed extensions: {}",
                exts.iter().collect::<Vec<_>>().join(", ")
            );
        }

        let rules = load_inclusion_rules(&root, options.manifest())?;
        let patterns = if options.patterns().is_empty() {
            None
        } else {
            Some(filters::compile_set(options.patterns())?)
        };

        Ok(Self {
            root,
            ignore,
            rules,
            exts,
            patterns,
        })
    }

    /// Absolute project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Manifest-derived inclusion rules.
    #[must_use]
    pub fn rules(&self) -> &[InclusionRule] {
        &self.rules
    }

    /// Directory verdict: kept and descended into unless ignored.
    #[must_use]
    pub fn directory_is_match(&self, entry: &WalkEntry) -> bool {
        !self.ignore.is_ignored(entry.full_path())
    }

    /// File verdict.
    ///
    /// The entry must pass the inclusion predicate and a caller pattern,
    /// neither its top-level component nor its full path may be ignored, and
    /// neither `skip` nor `ignore` may be set.
    #[must_use]
    pub fn file_is_match(&self, entry: &WalkEntry) -> bool {
        if !is_included(entry, &self.exts, &self.rules) {
            return false;
        }

        let relative = entry.relative_path();
        if let Some(patterns) = &self.patterns
            && !patterns.is_match(relative)
        {
            return false;
        }

        let top_level = relative
            .components()
            .next()
            .map_or(relative, |component| Path::new(component.as_os_str()));
        !self.ignore.is_ignored(top_level)
            && !self.ignore.is_ignored(entry.full_path())
            && !entry.skip
            && !entry.ignore
    }
}
