//! Parsing of `.gitignore`-style files into ignore and un-ignore groups.
//!
//! Only two classes of pattern are modelled. Each non-blank, non-comment
//! line becomes one [`IgnoreGroup`]; lines prefixed with `!` become
//! [`IgnoreKind::Unignore`] groups, everything else
//! [`IgnoreKind::Ignore`]. The line is translated into globs relative to the
//! directory that holds the ignore file:
//!
//! - a leading `/` or an interior `/` anchors the pattern at that directory,
//!   any other pattern matches at every depth (`**/` prefix);
//! - a trailing `/` is dropped;
//! - each line yields the pattern itself and `pattern/**`, so a matching
//!   directory takes its contents with it.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the ignore file read from the walk root by default.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Class of an ignore-file line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreKind {
    /// The line excludes matching paths.
    Ignore,
    /// The line re-includes matching paths (`!` prefix).
    Unignore,
}

impl fmt::Display for IgnoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => f.write_str("ignore"),
            Self::Unignore => f.write_str("unignore"),
        }
    }
}

/// Globs produced from a single ignore-file line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IgnoreGroup {
    /// Whether the globs ignore or un-ignore.
    pub kind: IgnoreKind,
    /// Glob translations of the line.
    pub patterns: Vec<String>,
}

/// Parses ignore-file contents into groups, one per pattern line.
///
/// # Examples
///
/// ```
/// use filters::{IgnoreKind, parse_ignore_file};
///
/// let groups = parse_ignore_file("# deps\nnode_modules/\n!/dist/keep.js\n");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].kind, IgnoreKind::Ignore);
/// assert_eq!(groups[0].patterns, ["**/node_modules", "**/node_modules/**"]);
/// assert_eq!(groups[1].kind, IgnoreKind::Unignore);
/// assert_eq!(groups[1].patterns, ["dist/keep.js", "dist/keep.js/**"]);
/// ```
#[must_use]
pub fn parse_ignore_file(contents: &str) -> Vec<IgnoreGroup> {
    contents.lines().filter_map(parse_line).collect()
}

/// Reads and parses the ignore file at `path`.
///
/// Returns `Ok(None)` when the file does not exist. Content that is not valid
/// UTF-8 is decoded lossily.
pub fn read_ignore_file(path: &Path) -> io::Result<Option<Vec<IgnoreGroup>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(parse_ignore_file(&String::from_utf8_lossy(&bytes)))),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(error),
    }
}

/// Strips trailing whitespace unless a backslash escapes it.
///
/// `notes\ ` keeps one literal space (`notes `). A line that still ends in an
/// unpaired backslash has nothing left to escape and yields `None`.
fn trim_trailing_whitespace(line: &str) -> Option<Cow<'_, str>> {
    let trimmed = line.trim_end();
    let backslashes = trimmed.len() - trimmed.trim_end_matches('\\').len();
    if backslashes % 2 == 0 {
        return Some(Cow::Borrowed(trimmed));
    }

    let escaped = line[trimmed.len()..].chars().next()?;
    let mut kept = String::with_capacity(trimmed.len());
    kept.push_str(&trimmed[..trimmed.len() - 1]);
    kept.push(escaped);
    Some(Cow::Owned(kept))
}

fn parse_line(line: &str) -> Option<IgnoreGroup> {
    let line = trim_trailing_whitespace(line)?;
    let line = line.as_ref();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (kind, body) = match line.strip_prefix('!') {
        Some(rest) => (IgnoreKind::Unignore, rest),
        None => (IgnoreKind::Ignore, line),
    };

    let body = if body.starts_with("\\#") || body.starts_with("\\!") {
        &body[1..]
    } else {
        body
    };
    let body = body.strip_suffix('/').unwrap_or(body);

    let anchored = body.contains('/');
    let core = body.trim_start_matches('/');
    if core.is_empty() {
        return None;
    }

    let base = if anchored || core.starts_with("**") {
        core.to_owned()
    } else {
        format!("**/{core}")
    };

    let patterns = if base.ends_with("/**") || base == "**" {
        vec![base]
    } else {
        let nested = format!("{base}/**");
        vec![base, nested]
    };

    Some(IgnoreGroup { kind, patterns })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(line: &str) -> Vec<String> {
        parse_line(line).expect("pattern line").patterns
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let groups = parse_ignore_file("# comment\n\n   \n");
        assert!(groups.is_empty());
    }

    #[test]
    fn bare_name_matches_at_any_depth() {
        assert_eq!(patterns("dist"), ["**/dist", "**/dist/**"]);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(patterns("node_modules/"), ["**/node_modules", "**/node_modules/**"]);
    }

    #[test]
    fn leading_slash_anchors_to_root() {
        assert_eq!(patterns("/coverage"), ["coverage", "coverage/**"]);
    }

    #[test]
    fn interior_slash_anchors_to_root() {
        assert_eq!(patterns("docs/build"), ["docs/build", "docs/build/**"]);
    }

    #[test]
    fn leading_double_star_is_kept() {
        assert_eq!(patterns("**/*.log"), ["**/*.log", "**/*.log/**"]);
        assert_eq!(patterns("cache/**"), ["cache/**"]);
    }

    #[test]
    fn bang_marks_unignore() {
        let group = parse_line("!keep.js").expect("group");
        assert_eq!(group.kind, IgnoreKind::Unignore);
        assert_eq!(group.patterns, ["**/keep.js", "**/keep.js/**"]);
    }

    #[test]
    fn escaped_leading_characters_are_literal() {
        let hash = parse_line("\\#notes").expect("group");
        assert_eq!(hash.kind, IgnoreKind::Ignore);
        assert_eq!(hash.patterns[0], "**/#notes");

        let bang = parse_line("\\!important").expect("group");
        assert_eq!(bang.kind, IgnoreKind::Ignore);
        assert_eq!(bang.patterns[0], "**/!important");
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        assert_eq!(patterns("tmp   "), ["**/tmp", "**/tmp/**"]);
    }

    #[test]
    fn escaped_trailing_space_is_kept() {
        assert_eq!(patterns("notes\\ "), ["**/notes ", "**/notes /**"]);
        assert_eq!(patterns("notes\\    "), ["**/notes ", "**/notes /**"]);
    }

    #[test]
    fn escaped_backslash_before_trailing_space_is_trimmed() {
        assert_eq!(patterns("notes\\\\ "), ["**/notes\\\\", "**/notes\\\\/**"]);
    }

    #[test]
    fn dangling_backslash_is_not_a_pattern() {
        assert!(parse_line("notes\\").is_none());
    }

    #[test]
    fn lone_slash_is_not_a_pattern() {
        assert!(parse_line("/").is_none());
        assert!(parse_line("!").is_none());
    }

    #[test]
    fn missing_file_reads_as_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let groups = read_ignore_file(&temp.path().join(".gitignore")).expect("read");
        assert!(groups.is_none());
    }

    #[test]
    fn existing_file_is_parsed() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(".gitignore");
        fs::write(&path, "target/\n!target/keep\n").expect("write");

        let groups = read_ignore_file(&path).expect("read").expect("present");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].kind, IgnoreKind::Ignore);
        assert_eq!(groups[1].kind, IgnoreKind::Unignore);
    }

    #[test]
    fn kind_display_tokens() {
        assert_eq!(IgnoreKind::Ignore.to_string(), "ignore");
        assert_eq!(IgnoreKind::Unignore.to_string(), "unignore");
    }
}
