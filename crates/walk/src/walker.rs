use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use logging::trace_walk;

use crate::builder::EntryFilter;
use crate::entry::{EntryKind, WalkEntry};
use crate::error::WalkError;

/// Receives entries from a [`Walker`] in traversal order.
pub trait WalkVisitor {
    /// Called for every directory before its contents.
    ///
    /// The walker descends only when `entry.verdict.recurse` is still set
    /// after this call, and hands `entry.ignore` down to the children.
    fn visit_directory(&mut self, entry: &mut WalkEntry);

    /// Called for every non-directory entry.
    fn visit_file(&mut self, entry: WalkEntry);
}

/// Depth-first walker over the children of a root directory.
pub struct Walker {
    root: PathBuf,
    base: PathBuf,
    filter: Option<EntryFilter>,
    stack: Vec<DirectoryState>,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        base: Option<PathBuf>,
        filter: Option<EntryFilter>,
    ) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        let base = match base {
            Some(base) => absolutize(base)?,
            None => root.clone(),
        };

        let metadata = fs::metadata(&root).map_err(|source| WalkError::Root {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(WalkError::NotADirectory { path: root });
        }

        trace_walk!("walking {} relative to {}", root.display(), base.display());
        Ok(Self {
            root,
            base,
            filter,
            stack: Vec::new(),
        })
    }

    /// Returns the absolute walk root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the absolute directory relative paths are computed against.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Visits every entry below the root.
    ///
    /// Siblings are visited in lexicographic order and a directory is
    /// reported before its contents. The first I/O failure stops the walk.
    pub fn walk<V: WalkVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<(), WalkError> {
        self.stack.clear();
        self.stack
            .push(DirectoryState::new(self.root.clone(), 0, false)?);

        loop {
            let (full_path, depth, inherited_ignore) = {
                let Some(state) = self.stack.last_mut() else {
                    return Ok(());
                };
                let Some(name) = state.next_name() else {
                    self.stack.pop();
                    continue;
                };
                (state.fs_path.join(name), state.depth + 1, state.ignore)
            };

            let mut entry = self.prepare_entry(full_path, depth, inherited_ignore)?;
            match entry.kind() {
                EntryKind::Directory => {
                    visitor.visit_directory(&mut entry);
                    if entry.verdict.recurse {
                        let state =
                            DirectoryState::new(entry.full_path().to_path_buf(), depth, entry.ignore)?;
                        self.stack.push(state);
                    } else {
                        trace_walk!("not descending into {}", entry.relative_path().display());
                    }
                }
                EntryKind::File => visitor.visit_file(entry),
            }
        }
    }

    fn prepare_entry(
        &self,
        full_path: PathBuf,
        depth: usize,
        inherited_ignore: bool,
    ) -> Result<WalkEntry, WalkError> {
        let metadata = fs::symlink_metadata(&full_path).map_err(|source| WalkError::Metadata {
            path: full_path.clone(),
            source,
        })?;
        let kind = if metadata.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        let relative_path = self.relative_to_base(&full_path);
        let mut entry = WalkEntry::new(full_path, relative_path, kind).with_depth(depth);
        entry.ignore = inherited_ignore;
        if let Some(filter) = &self.filter {
            entry.skip = !filter(&entry);
        }
        Ok(entry)
    }

    fn relative_to_base(&self, full_path: &Path) -> PathBuf {
        full_path
            .strip_prefix(&self.base)
            .or_else(|_| full_path.strip_prefix(&self.root))
            .map_or_else(|_| full_path.to_path_buf(), Path::to_path_buf)
    }
}

#[derive(Clone, Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    entries: Vec<OsString>,
    index: usize,
    depth: usize,
    ignore: bool,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, depth: usize, ignore: bool) -> Result<Self, WalkError> {
        let listing_failed = |source| WalkError::ReadDir {
            path: fs_path.clone(),
            source,
        };
        let mut entries = fs::read_dir(&fs_path)
            .map_err(listing_failed)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(listing_failed)?;
        entries.sort();

        trace_walk!("found {} entries in {}", entries.len(), fs_path.display());

        Ok(Self {
            fs_path,
            entries,
            index: 0,
            depth,
            ignore,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(name)
    }
}

/// Resolves `path` against the current working directory when it is
/// relative.
///
/// No canonicalization happens; `..` segments and symlinks are kept.
pub fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(|source| WalkError::CurrentDir {
            path: path.clone(),
            source,
        })?;
        Ok(cwd.join(path))
    }
}
