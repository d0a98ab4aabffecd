use tidyroot_core::{CleanupPlan, ListingEntry, RemovalOutcome, RemovalRecord};
use tracing::{debug, info};

use crate::Result;
use crate::traits::{CleanupReporter, FileSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOutput {
    pub removals: Vec<RemovalRecord>,
    pub listing: Vec<ListingEntry>,
}

pub struct CleanupOperation<F> {
    file_system: F,
}

impl<F> CleanupOperation<F>
where
    F: FileSystem,
{
    pub fn new(file_system: F) -> Self {
        Self { file_system }
    }

    /// Removes every target of `plan`, then lists what remains at its root.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while inspecting, removing, or listing.
    /// Targets processed before the failure have already been reported, and a
    /// listing failure comes after `removals_finished`.
    pub fn execute<R>(&self, plan: &CleanupPlan, reporter: &mut R) -> Result<CleanupOutput>
    where
        R: CleanupReporter + ?Sized,
    {
        let removals = self.remove_targets(plan, reporter)?;
        reporter.removals_finished(&removals);
        let listing = self.list_root(plan)?;

        Ok(CleanupOutput { removals, listing })
    }

    /// # Errors
    ///
    /// Returns an error if a present target cannot be inspected or removed.
    pub fn remove_targets<R>(
        &self,
        plan: &CleanupPlan,
        reporter: &mut R,
    ) -> Result<Vec<RemovalRecord>>
    where
        R: CleanupReporter + ?Sized,
    {
        let mut records = Vec::with_capacity(plan.targets().len());

        for target in plan.targets() {
            let record = RemovalRecord::new(target.as_str(), self.remove_target(plan, target)?);
            reporter.report_removal(&record);
            records.push(record);
        }

        Ok(records)
    }

    fn remove_target(&self, plan: &CleanupPlan, target: &str) -> Result<RemovalOutcome> {
        let path = plan.resolve(target);
        debug!(item = %target, path = %path.display(), "resolved removal target");

        let Some(kind) = self.file_system.entry_kind(&path)? else {
            debug!(item = %target, "removal target already absent");
            return Ok(RemovalOutcome::AlreadyAbsent);
        };

        if kind.is_dir() {
            self.file_system.remove_dir_all(&path)?;
        } else {
            self.file_system.remove_file(&path)?;
        }

        let outcome = RemovalOutcome::from(kind);
        info!(item = %target, %outcome, "removed");
        Ok(outcome)
    }

    /// Directories under the base path plus allow-listed files, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path cannot be read.
    pub fn list_root(&self, plan: &CleanupPlan) -> Result<Vec<ListingEntry>> {
        let mut entries: Vec<ListingEntry> = self
            .file_system
            .read_dir(plan.base_path())?
            .into_iter()
            .filter(|entry| entry.kind.is_dir() || plan.is_visible_file(&entry.name))
            .collect();

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(
            base_path = %plan.base_path().display(),
            shown = entries.len(),
            "listed base path"
        );

        Ok(entries)
    }
}
