use std::path::Path;

use logging::trace_walk;
use walk::{Verdict, WalkBuilder, WalkEntry, WalkVisitor};

use crate::{EntryHooks, MatcherSet, NoHooks, ProjectError, ProjectOptions};

/// Walks `root` and returns the files that belong to the project, in
/// traversal order.
///
/// # Examples
///
/// ```
/// use project::{ProjectOptions, project_files};
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::create_dir(temp.path().join("src"))?;
/// std::fs::write(temp.path().join("src/app.ts"), "")?;
/// std::fs::write(temp.path().join("README.md"), "")?;
///
/// let files = project_files(temp.path(), &ProjectOptions::new())?;
/// let relative: Vec<_> = files.iter().map(|file| file.relative_path()).collect();
/// assert_eq!(relative, [std::path::Path::new("src/app.ts")]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn project_files(
    root: impl AsRef<Path>,
    options: &ProjectOptions,
) -> Result<Vec<WalkEntry>, ProjectError> {
    project_files_with(root, options, &mut NoHooks)
}

/// Like [`project_files`], running `hooks` for every kept entry.
pub fn project_files_with<H>(
    root: impl AsRef<Path>,
    options: &ProjectOptions,
    hooks: &mut H,
) -> Result<Vec<WalkEntry>, ProjectError>
where
    H: EntryHooks + ?Sized,
{
    let matchers = MatcherSet::build(root.as_ref(), options)?;

    let mut builder = WalkBuilder::new(matchers.root());
    if let Some(cwd) = options.cwd() {
        builder = builder.base(cwd);
    }
    if let Some(filter) = options.filter() {
        let filter = filter.clone();
        builder = builder.filter(move |entry| filter(entry));
    }

    let mut visitor = ProjectVisitor {
        matchers: &matchers,
        hooks,
        include_dirs: options.includes_dirs(),
        entries: Vec::new(),
    };
    builder.build()?.walk(&mut visitor)?;

    tracing::debug!(
        target: logging::WALK_TARGET,
        "kept {} entries under {}",
        visitor.entries.len(),
        matchers.root().display()
    );
    Ok(visitor.entries)
}

struct ProjectVisitor<'a, H: ?Sized> {
    matchers: &'a MatcherSet,
    hooks: &'a mut H,
    include_dirs: bool,
    entries: Vec<WalkEntry>,
}

impl<H: EntryHooks + ?Sized> WalkVisitor for ProjectVisitor<'_, H> {
    fn visit_directory(&mut self, entry: &mut WalkEntry) {
        entry.verdict = Verdict::both(self.matchers.directory_is_match(entry));
        if entry.verdict.keep {
            self.hooks.on_directory(entry);
        }

        if !entry.verdict.recurse {
            trace_walk!("pruned {}", entry.relative_path().display());
        }
        if self.include_dirs && entry.verdict.keep {
            self.entries.push(entry.clone());
        }
    }

    fn visit_file(&mut self, mut entry: WalkEntry) {
        if !self.matchers.file_is_match(&entry) {
            trace_walk!("dropped {}", entry.relative_path().display());
            return;
        }

        self.hooks.on_file(&mut entry);
        trace_walk!("kept {}", entry.relative_path().display());
        self.entries.push(entry);
    }
}
