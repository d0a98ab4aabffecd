use std::io::{self, Write};

use tidyroot_core::CleanupPlan;
use tidyroot_operations::operations::CleanupOperation;
use tidyroot_operations::providers::StdFileSystem;

use crate::error::{CliError, Result};
use crate::output::{PlainTextReportFormatter, ReportFormatter, WriterReporter};

pub(crate) fn run(plan: &CleanupPlan) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(plan, &mut out)
}

/// Runs the cleanup, writing the report to `out` as each step completes.
fn write_report<W: Write>(plan: &CleanupPlan, out: &mut W) -> Result<()> {
    let formatter = PlainTextReportFormatter;
    let operation = CleanupOperation::new(StdFileSystem::new());

    out.write_all(formatter.format_header().as_bytes())
        .map_err(CliError::Report)?;

    let mut reporter = WriterReporter::new(&formatter, out);
    let result = operation.execute(plan, &mut reporter);
    let written = reporter.finish();

    let output = result?;
    written.map_err(CliError::Report)?;
    tracing::debug!(processed = output.removals.len(), "removal targets processed");

    out.write_all(formatter.format_listing(&output.listing).as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Report)
}
