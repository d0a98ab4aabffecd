use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tidyroot_core::{EntryKind, ListingEntry};

use crate::Result;
use crate::error::OperationError;
use crate::traits::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl StdFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn entry_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(None)
            }
            Err(source) => Err(OperationError::Inspect {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        let remove_error = |source| OperationError::RemoveDirectory {
            path: path.to_path_buf(),
            source,
        };

        // `fs::remove_dir_all` would only unlink the symlink and leave the tree behind.
        if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
            return Err(remove_error(std::io::Error::other(
                "cannot remove a symbolic link as a directory tree",
            )));
        }

        fs::remove_dir_all(path).map_err(remove_error)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|source| OperationError::RemoveFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<ListingEntry>> {
        let list_error = |source| OperationError::ListRoot {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();

        for entry in fs::read_dir(path).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());

            entries.push(if is_dir {
                ListingEntry::directory(name)
            } else {
                ListingEntry::file(name)
            });
        }

        Ok(entries)
    }
}
