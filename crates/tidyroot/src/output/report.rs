use std::io::{self, Write};

use tidyroot_core::{EntryKind, ListingEntry, RemovalOutcome, RemovalRecord};
use tidyroot_operations::traits::CleanupReporter;

pub(crate) trait ReportFormatter {
    fn format_header(&self) -> String;
    fn format_removal(&self, record: &RemovalRecord) -> String;
    fn format_summary(&self) -> String;
    fn format_listing(&self, listing: &[ListingEntry]) -> String;
}

pub(crate) struct PlainTextReportFormatter;

impl PlainTextReportFormatter {
    fn format_entry(output: &mut String, entry: &ListingEntry) {
        match entry.kind {
            EntryKind::Directory => output.push_str(&format!("   📁 {}/\n", entry.name)),
            EntryKind::File => output.push_str(&format!("   📄 {}\n", entry.name)),
        }
    }
}

impl ReportFormatter for PlainTextReportFormatter {
    fn format_header(&self) -> String {
        "🧹 Cleaning up old duplicate folders and files...\n\n".to_string()
    }

    fn format_removal(&self, record: &RemovalRecord) -> String {
        match record.outcome {
            RemovalOutcome::RemovedDirectory => {
                format!("✅ Removed directory: {}/\n", record.target)
            }
            RemovalOutcome::RemovedFile => format!("✅ Removed file: {}\n", record.target),
            RemovalOutcome::AlreadyAbsent => format!("⏭️  Already gone: {}\n", record.target),
        }
    }

    fn format_summary(&self) -> String {
        "\n🎉 Cleanup complete!\n\n📁 Current root structure:\n".to_string()
    }

    fn format_listing(&self, listing: &[ListingEntry]) -> String {
        let mut output = String::new();
        for entry in listing {
            Self::format_entry(&mut output, entry);
        }
        output
    }
}

/// Writes each removal line as soon as the operation reports it, and the
/// summary once all targets are processed.
///
/// The first write error is kept and returned by [`WriterReporter::finish`].
pub(crate) struct WriterReporter<'a, F, W> {
    formatter: &'a F,
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, F, W> WriterReporter<'a, F, W>
where
    F: ReportFormatter,
    W: Write,
{
    pub(crate) fn new(formatter: &'a F, out: &'a mut W) -> Self {
        Self {
            formatter,
            out,
            error: None,
        }
    }

    pub(crate) fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }

    fn write(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }
}

impl<F, W> CleanupReporter for WriterReporter<'_, F, W>
where
    F: ReportFormatter,
    W: Write,
{
    fn report_removal(&mut self, record: &RemovalRecord) {
        let line = self.formatter.format_removal(record);
        self.write(&line);
    }

    fn removals_finished(&mut self, _records: &[RemovalRecord]) {
        let summary = self.formatter.format_summary();
        self.write(&summary);
    }
}
