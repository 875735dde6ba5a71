// src/progress.rs
use crate::crawl::StepOutcome;

/// Lightweight progress reporting used by long-running operations (crawl/harvest).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One crawl step finished (recoverably or not).
    fn step_done(&mut self, _index: usize, _outcome: &StepOutcome) {}

    /// One harvested match was processed.
    fn item_done(&mut self, _match_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
