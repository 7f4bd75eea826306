use std::fs;
use std::path::Path;

use crate::error::{RegistryError, Result};
use crate::loaders::{DirectoryLister, ListedEntry};

/// Directory lister backed by `std::fs`.
///
/// Each call opens one directory handle, drains it, and drops it before
/// returning; no handle outlives the listing that produced it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemLister;

impl DirectoryLister for FilesystemLister {
    fn list_dir(&self, path: &Path) -> Result<Vec<ListedEntry>> {
        let list_error = |source: std::io::Error| RegistryError::DirectoryList {
            path: path.display().to_string(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            entries.push(ListedEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }

        Ok(entries)
    }
}
