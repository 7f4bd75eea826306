pub mod filesystem;

use std::path::Path;

use crate::error::Result;

/// A single entry reported while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Entry name, not a full path
    pub name: String,
    /// Whether the entry is itself a directory
    pub is_dir: bool,
}

impl ListedEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Directory-listing primitive consumed by the catalog builder.
///
/// Implementations open the directory, drain its immediate entries, and
/// release the handle before returning. Failure to open/list is the only
/// error surface; the scan reports it and moves on.
pub trait DirectoryLister: Send + Sync {
    fn list_dir(&self, path: &Path) -> Result<Vec<ListedEntry>>;
}
