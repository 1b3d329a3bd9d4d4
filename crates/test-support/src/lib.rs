//! Filesystem fixtures shared by the workspace's tests.
//!
//! Helpers panic on I/O failure; they are only meant for test code.

#![allow(clippy::missing_panics_doc)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary project directory removed on drop.
#[derive(Debug)]
pub struct TestDir {
    temp: TempDir,
}

impl TestDir {
    /// Creates an empty temporary directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("create tempdir"),
        }
    }

    /// Creates a temporary directory populated with `tree`.
    #[must_use]
    pub fn with_tree(tree: &FileTree) -> Self {
        let dir = Self::new();
        tree.create_in(dir.path());
        dir
    }

    /// Absolute path of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Joins `relative` onto the directory.
    #[must_use]
    pub fn join<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Writes a file, creating parent directories as needed.
    pub fn write_file<P: AsRef<Path>>(&self, relative: P, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(relative);
        write_with_parents(&path, contents.as_ref());
        path
    }

    /// Creates a directory and its parents.
    pub fn create_dir<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Reports whether `relative` exists below the directory.
    #[must_use]
    pub fn exists<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.join(relative).exists()
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Declarative description of files and empty directories.
///
/// ```
/// use test_support::{FileTree, TestDir};
///
/// let tree = FileTree::new()
///     .file("src/index.js", "")
///     .dir("dist");
/// let dir = TestDir::with_tree(&tree);
/// assert!(dir.exists("src/index.js"));
/// assert!(dir.path().join("dist").is_dir());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    entries: Vec<(PathBuf, Option<Vec<u8>>)>,
}

impl FileTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with `contents`.
    #[must_use]
    pub fn file<P: Into<PathBuf>>(mut self, path: P, contents: impl AsRef<[u8]>) -> Self {
        self.entries
            .push((path.into(), Some(contents.as_ref().to_vec())));
        self
    }

    /// Adds an empty directory.
    #[must_use]
    pub fn dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.entries.push((path.into(), None));
        self
    }

    /// Materialises the tree below `base`.
    pub fn create_in(&self, base: &Path) {
        for (path, contents) in &self.entries {
            let full_path = base.join(path);
            match contents {
                Some(data) => write_with_parents(&full_path, data),
                None => fs::create_dir_all(&full_path).expect("create directory"),
            }
        }
    }
}

fn write_with_parents(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}
