use std::ffi::OsString;

use project::{EntryHooks, Verdict, WalkEntry};

/// Directory hook that vetoes directories by name, e.g. `.git`.
#[derive(Debug, Default)]
pub(crate) struct SkipDirectories {
    names: Vec<OsString>,
}

impl SkipDirectories {
    pub(crate) fn new<I: IntoIterator<Item = OsString>>(names: I) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }
}

impl EntryHooks for SkipDirectories {
    fn on_directory(&mut self, entry: &mut WalkEntry) {
        if self.names.iter().any(|name| name == entry.file_name()) {
            entry.verdict = Verdict::both(false);
        }
    }
}
