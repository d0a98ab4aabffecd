use tidyroot_core::RemovalRecord;

/// Receives each removal record as soon as its target has been processed.
pub trait CleanupReporter {
    fn report_removal(&mut self, record: &RemovalRecord);

    /// Called once every target is processed, before the base path is listed.
    fn removals_finished(&mut self, _records: &[RemovalRecord]) {}
}

pub struct NoopReporter;

impl CleanupReporter for NoopReporter {
    fn report_removal(&mut self, _record: &RemovalRecord) {}
}
