// src/progress.rs
/// Lightweight progress reporting for a category run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of listing rows.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item has been assembled.
    fn item_done(&mut self, _name: &str) {}

    /// Called when a row was dropped or a field lookup failed.
    fn item_failed(&mut self, _name: &str, _what: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
