use walk::WalkEntry;

/// Caller callbacks run for entries the matchers keep.
///
/// Both methods default to doing nothing.
pub trait EntryHooks {
    /// Runs for a kept directory before its contents are walked. Changes to
    /// `entry.verdict` and `entry.ignore` are honoured.
    fn on_directory(&mut self, entry: &mut WalkEntry) {
        let _ = entry;
    }

    /// Runs for a kept file before it is appended to the result.
    fn on_file(&mut self, entry: &mut WalkEntry) {
        let _ = entry;
    }
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl EntryHooks for NoHooks {}

impl<T: EntryHooks + ?Sized> EntryHooks for &mut T {
    fn on_directory(&mut self, entry: &mut WalkEntry) {
        (**self).on_directory(entry);
    }

    fn on_file(&mut self, entry: &mut WalkEntry) {
        (**self).on_file(entry);
    }
}
