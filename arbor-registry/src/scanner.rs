//! Directory-walk helpers for the catalog builder.
//!
//! Every helper is pure in the sense that it returns a freshly built
//! collection for the caller to merge; nothing here writes through to the
//! registration store or the published catalog.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error};

use crate::loaders::DirectoryLister;

/// Catch-all category for tasks that sit directly in a root directory
/// instead of a named subdirectory.
pub const MISC_CATEGORY: &str = "Miscellaneous";

/// Walk one configured root directory.
///
/// First-level subdirectories become categories (via [`capitalize_category`])
/// holding the script files found directly inside them; script files loose
/// in the root itself are collected under [`MISC_CATEGORY`]. A subdirectory
/// containing no script files still contributes its category key. Entries
/// whose name starts with a dot are skipped, which also covers listers that
/// report the directory itself as `"."` — the root's own files are only ever
/// picked up by the explicit pass at the end, so they cannot be counted
/// twice.
///
/// An unreadable root or subdirectory is reported and contributes nothing;
/// it never aborts the walk.
pub(crate) fn scan_user_dir(
    lister: &dyn DirectoryLister,
    root: &str,
    extensions: &[String],
) -> HashMap<String, Vec<String>> {
    let mut categories: HashMap<String, Vec<String>> = HashMap::new();

    // An empty path means "nothing configured"; not an error.
    if root.is_empty() {
        return categories;
    }

    let root_path = Path::new(root);
    let entries = match lister.list_dir(root_path) {
        Ok(entries) => entries,
        Err(err) => {
            error!("{}", err);
            return categories;
        }
    };

    for entry in entries {
        if !entry.is_dir || entry.name.starts_with('.') {
            continue;
        }

        let category = capitalize_category(&entry.name);
        let sub_root = root_path.join(&entry.name);
        debug!("Scanning \"{}\" into category {}", sub_root.display(), category);

        let tasks = script_tasks_in_dir(lister, &sub_root, extensions);
        categories.entry(category).or_default().extend(tasks);
    }

    // Loose scripts next to the category subfolders land in Miscellaneous.
    let loose = script_tasks_in_dir(lister, root_path, extensions);
    categories
        .entry(MISC_CATEGORY.to_string())
        .or_default()
        .extend(loose);

    categories
}

/// Collect the script files directly inside `dir` (one level, no recursion)
/// as full paths. An unreadable directory is reported and yields nothing.
pub(crate) fn script_tasks_in_dir(
    lister: &dyn DirectoryLister,
    dir: &Path,
    extensions: &[String],
) -> Vec<String> {
    let entries = match lister.list_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            error!("{}", err);
            return Vec::new();
        }
    };

    let mut tasks = Vec::new();
    for entry in entries {
        if entry.is_dir {
            continue;
        }
        if has_script_extension(&entry.name, extensions) {
            tasks.push(dir.join(&entry.name).to_string_lossy().into_owned());
        }
    }
    tasks
}

fn has_script_extension(name: &str, extensions: &[String]) -> bool {
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext)))
}

/// Category name inference for a subdirectory name: tokens separated by
/// non-alphanumeric characters are title-cased and rejoined with single
/// spaces, so `patrol_tasks` becomes `Patrol Tasks`.
pub fn capitalize_category(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Ordering for a category's task list: case-insensitive by basename, with
/// the full identifier as tiebreak so the sort stays total when basenames
/// collide across directories or with built-in class names.
pub(crate) fn compare_task_names(a: &str, b: &str) -> Ordering {
    task_basename(a)
        .to_lowercase()
        .cmp(&task_basename(b).to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Final path segment of an identifier; bare class names are their own
/// basename.
fn task_basename(identifier: &str) -> &str {
    Path::new(identifier)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(identifier)
}
