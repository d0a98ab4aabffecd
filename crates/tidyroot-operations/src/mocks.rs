use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tidyroot_core::{EntryKind, ListingEntry, RemovalRecord};

use crate::Result;
use crate::error::OperationError;
use crate::traits::{CleanupReporter, FileSystem};

/// In-memory tree rooted at a single directory. Clones share state so a test
/// can hand one copy to an operation and inspect the other.
#[derive(Clone)]
pub struct MockFileSystem {
    root: PathBuf,
    entries: Arc<Mutex<BTreeMap<PathBuf, EntryKind>>>,
    failing: Arc<HashSet<PathBuf>>,
    removal_log: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockFileSystem {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut entries = BTreeMap::new();
        entries.insert(root.clone(), EntryKind::Directory);
        Self {
            root,
            entries: Arc::new(Mutex::new(entries)),
            failing: Arc::new(HashSet::new()),
            removal_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_dir(self, relative: &str) -> Self {
        self.insert(relative, EntryKind::Directory)
    }

    #[must_use]
    pub fn with_file(self, relative: &str) -> Self {
        self.insert(relative, EntryKind::File)
    }

    /// Removing this entry fails with `PermissionDenied`.
    #[must_use]
    pub fn fail_removal_of(mut self, relative: &str) -> Self {
        let mut failing = (*self.failing).clone();
        failing.insert(self.root.join(relative));
        self.failing = Arc::new(failing);
        self
    }

    /// # Panics
    ///
    /// Panics if the entries lock is poisoned.
    #[must_use]
    pub fn contains(&self, relative: &str) -> bool {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .contains_key(&self.root.join(relative))
    }

    /// # Panics
    ///
    /// Panics if the log lock is poisoned.
    #[must_use]
    pub fn removal_log(&self) -> Vec<PathBuf> {
        self.removal_log.lock().expect("log lock poisoned").clone()
    }

    fn insert(self, relative: &str, kind: EntryKind) -> Self {
        self.entries
            .lock()
            .expect("entries lock poisoned")
            .insert(self.root.join(relative), kind);
        self
    }

    fn remove(&self, path: &Path, expected: EntryKind) -> std::result::Result<(), io::Error> {
        if self.failing.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "mock denied"));
        }

        let mut entries = self.entries.lock().expect("entries lock poisoned");
        match entries.get(path) {
            Some(kind) if *kind == expected => {}
            Some(_) => return Err(io::Error::other("mock entry has the wrong kind")),
            None => return Err(io::Error::from(io::ErrorKind::NotFound)),
        }

        entries.retain(|candidate, _| !candidate.starts_with(path));
        self.removal_log
            .lock()
            .expect("log lock poisoned")
            .push(path.to_path_buf());
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        Ok(self
            .entries
            .lock()
            .expect("entries lock poisoned")
            .get(path)
            .copied())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove(path, EntryKind::Directory)
            .map_err(|source| OperationError::RemoveDirectory {
                path: path.to_path_buf(),
                source,
            })
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove(path, EntryKind::File)
            .map_err(|source| OperationError::RemoveFile {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<ListingEntry>> {
        let entries = self.entries.lock().expect("entries lock poisoned");

        if entries.get(path) != Some(&EntryKind::Directory) {
            return Err(OperationError::ListRoot {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }

        Ok(entries
            .iter()
            .filter(|(candidate, _)| candidate.parent() == Some(path))
            .filter_map(|(candidate, kind)| {
                let name = candidate.file_name()?.to_string_lossy().into_owned();
                Some(ListingEntry { name, kind: *kind })
            })
            .collect())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub records: Vec<RemovalRecord>,
    pub finished_with: Option<Vec<RemovalRecord>>,
}

impl CleanupReporter for RecordingReporter {
    fn report_removal(&mut self, record: &RemovalRecord) {
        self.records.push(record.clone());
    }

    fn removals_finished(&mut self, records: &[RemovalRecord]) {
        self.finished_with = Some(records.to_vec());
    }
}
