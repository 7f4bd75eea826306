use std::collections::HashMap;

use arbor_config::RegistryConfig;
use tracing::{debug, info};

use crate::loaders::{filesystem::FilesystemLister, DirectoryLister};
use crate::scanner::{compare_task_names, scan_user_dir, MISC_CATEGORY};

/// Unified task registry for the tree editor: built-in tasks registered by
/// compiled components at startup, merged on each scan with user-authored
/// script tasks discovered under the configured directories.
///
/// The registry is an ordinary owned value, constructed once at startup and
/// handed to whoever needs it; there is no ambient singleton. The published
/// catalog is rebuilt entirely off to the side and swapped in with a single
/// assignment, so callers sharing a registry across threads only need to
/// guard it with a lock to keep queries from observing a partial catalog.
pub struct TaskRegistry {
    config: RegistryConfig,
    lister: Box<dyn DirectoryLister>,
    /// Built-in tasks by category, append-only for the life of the registry
    registered: HashMap<String, Vec<String>>,
    /// Catalog published by the most recent scan; empty until then
    catalog: HashMap<String, Vec<String>>,
}

impl TaskRegistry {
    /// Registry scanning the real filesystem.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_lister(config, Box::new(FilesystemLister))
    }

    /// Registry with a custom directory lister.
    pub fn with_lister(config: RegistryConfig, lister: Box<dyn DirectoryLister>) -> Self {
        Self {
            config,
            lister,
            registered: HashMap::new(),
            catalog: HashMap::new(),
        }
    }

    /// Record a built-in task under `category`, creating the category on
    /// first use. Entries are appended in call order and never removed,
    /// reordered, or deduplicated; both strings are stored as given. The
    /// task becomes queryable after the next [`scan`](Self::scan).
    pub fn register_task(&mut self, class_name: impl Into<String>, category: impl Into<String>) {
        self.registered
            .entry(category.into())
            .or_default()
            .push(class_name.into());
    }

    /// Rebuild and publish the catalog.
    ///
    /// Seeds a new catalog with a structural copy of the registered tasks
    /// (so the registration store can never be mutated through it), ensures
    /// the misc category exists, walks every configured root in order, sorts
    /// each category's list, and replaces the previous catalog in one swap.
    ///
    /// Unreadable directories are reported and skipped; a scan never fails
    /// from the caller's point of view.
    pub fn scan(&mut self) {
        let mut catalog = self.registered.clone();
        catalog.entry(MISC_CATEGORY.to_string()).or_default();

        for root in &self.config.task_directories {
            let discovered =
                scan_user_dir(self.lister.as_ref(), root, &self.config.script_extensions);
            let found: usize = discovered.values().map(Vec::len).sum();
            debug!("Found {} user tasks under \"{}\"", found, root);

            for (category, tasks) in discovered {
                catalog.entry(category).or_default().extend(tasks);
            }
        }

        for tasks in catalog.values_mut() {
            tasks.sort_by(|a, b| compare_task_names(a, b));
        }

        let total: usize = catalog.values().map(Vec::len).sum();
        info!(
            "Task catalog rebuilt: {} tasks in {} categories",
            total,
            catalog.len()
        );

        self.catalog = catalog;
    }

    /// Every category in the current catalog, ascending.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self.catalog.keys().cloned().collect();
        categories.sort();
        categories
    }

    /// Tasks in `category` as ordered by the last scan. An unknown category
    /// yields an empty list rather than an error.
    pub fn tasks_in_category(&self, category: &str) -> Vec<String> {
        self.catalog.get(category).cloned().unwrap_or_default()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_config() -> RegistryConfig {
        RegistryConfig {
            task_directories: Vec::new(),
            ..RegistryConfig::default()
        }
    }

    #[test]
    fn test_queries_are_empty_before_first_scan() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("AttackTask", "Combat");

        assert!(registry.categories().is_empty());
        assert!(registry.tasks_in_category("Combat").is_empty());
    }

    #[test]
    fn test_misc_category_always_present_after_scan() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.scan();

        assert_eq!(registry.categories(), vec![MISC_CATEGORY.to_string()]);
        assert!(registry.tasks_in_category(MISC_CATEGORY).is_empty());
    }

    #[test]
    fn test_registrations_survive_scan() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("SequenceTask", "Flow");
        registry.register_task("SelectorTask", "Flow");
        registry.scan();

        assert_eq!(
            registry.categories(),
            vec!["Flow".to_string(), MISC_CATEGORY.to_string()]
        );
        assert_eq!(
            registry.tasks_in_category("Flow"),
            vec!["SelectorTask", "SequenceTask"]
        );
    }

    #[test]
    fn test_duplicate_registrations_are_preserved() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("AttackTask", "Combat");
        registry.register_task("AttackTask", "Combat");
        registry.scan();

        assert_eq!(
            registry.tasks_in_category("Combat"),
            vec!["AttackTask", "AttackTask"]
        );
    }

    #[test]
    fn test_registration_between_scans_only_visible_after_rescan() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("AttackTask", "Combat");
        registry.scan();

        registry.register_task("BlockTask", "Combat");
        assert_eq!(registry.tasks_in_category("Combat"), vec!["AttackTask"]);

        registry.scan();
        assert_eq!(
            registry.tasks_in_category("Combat"),
            vec!["AttackTask", "BlockTask"]
        );
    }

    #[test]
    fn test_scan_never_mutates_registration_store() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("AttackTask", "Combat");

        // Repeated scans rebuild from the same store.
        registry.scan();
        registry.scan();

        assert_eq!(registry.tasks_in_category("Combat"), vec!["AttackTask"]);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("AttackTask", "Combat");
        registry.scan();

        assert_eq!(registry.categories(), registry.categories());
        assert_eq!(
            registry.tasks_in_category("Combat"),
            registry.tasks_in_category("Combat")
        );
    }

    #[test]
    fn test_unknown_category_yields_empty_list() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.scan();

        assert!(registry.tasks_in_category("No Such Category").is_empty());
    }

    #[test]
    fn test_empty_strings_are_registered_as_given() {
        let mut registry = TaskRegistry::new(empty_config());
        registry.register_task("", "");
        registry.scan();

        assert_eq!(registry.tasks_in_category(""), vec![""]);
    }
}
