use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    #[must_use]
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalOutcome {
    RemovedDirectory,
    RemovedFile,
    AlreadyAbsent,
}

impl From<EntryKind> for RemovalOutcome {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Directory => Self::RemovedDirectory,
            EntryKind::File => Self::RemovedFile,
        }
    }
}

impl fmt::Display for RemovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RemovedDirectory => "removed directory",
            Self::RemovedFile => "removed file",
            Self::AlreadyAbsent => "already absent",
        };
        write!(f, "{s}")
    }
}

/// The result of processing a single removal target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRecord {
    pub target: String,
    pub outcome: RemovalOutcome,
}

impl RemovalRecord {
    #[must_use]
    pub fn new(target: impl Into<String>, outcome: RemovalOutcome) -> Self {
        Self {
            target: target.into(),
            outcome,
        }
    }
}

/// An immediate child of the base path as it appears in the final listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ListingEntry {
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}
