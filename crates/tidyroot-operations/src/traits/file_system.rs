use std::path::Path;

use tidyroot_core::{EntryKind, ListingEntry};

use crate::Result;

pub trait FileSystem: Send + Sync {
    /// Returns `None` when nothing exists at `path`. Symlinks are followed,
    /// so a dangling link counts as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but cannot be inspected.
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>>;

    /// # Errors
    ///
    /// Returns an error if the directory or any of its contents cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Immediate children of `path`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn read_dir(&self, path: &Path) -> Result<Vec<ListingEntry>>;
}
