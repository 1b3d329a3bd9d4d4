//! Glob compilation shared by every matcher in the workspace.
//!
//! All patterns are compiled with `*` and `?` refusing to cross `/`, so only
//! `**` spans directory boundaries. Backslash escapes are honoured so literal
//! metacharacters can be matched.

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

use crate::FilterError;

fn build_glob(pattern: &str) -> Result<Glob, FilterError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map_err(|error| FilterError::new(pattern.to_owned(), error))
}

/// Compiles a single pattern into a [`GlobMatcher`].
///
/// # Errors
///
/// Returns [`FilterError`] naming `pattern` when it is not a valid glob.
///
/// # Examples
///
/// ```
/// let matcher = filters::compile_matcher("src/**/*.ts").unwrap();
/// assert!(matcher.is_match("src/a/b.ts"));
/// assert!(!matcher.is_match("lib/b.ts"));
/// ```
pub fn compile_matcher(pattern: &str) -> Result<GlobMatcher, FilterError> {
    Ok(build_glob(pattern)?.compile_matcher())
}

/// Compiles every pattern into one [`GlobSet`] that matches when any pattern
/// matches.
///
/// # Errors
///
/// Returns [`FilterError`] for the first pattern that fails to compile.
pub fn compile_set<I, S>(patterns: I) -> Result<GlobSet, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = GlobSetBuilder::new();
    let mut joined = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        builder.add(build_glob(pattern)?);
        joined.push(pattern.to_owned());
    }
    builder
        .build()
        .map_err(|error| FilterError::new(joined.join(", "), error))
}
