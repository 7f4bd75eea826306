//! Registry configuration for task discovery

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Task registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Root directories scanned for user-authored tasks, in order.
    /// First-level subdirectory names become category names; loose script
    /// files directly inside a root land in the misc category. Empty
    /// entries mean "nothing configured" and are skipped.
    #[serde(default)]
    pub task_directories: Vec<String>,

    /// Recognized script-file extensions, without the leading dot
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            task_directories: Vec::new(),
            script_extensions: default_script_extensions(),
        }
    }
}

impl Validatable for RegistryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.script_extensions.is_empty() {
            return Err(self.validation_error("at least one script extension must be configured"));
        }

        for extension in &self.script_extensions {
            validate_required_string(extension, "script_extensions", self.domain_name())?;
            if extension.starts_with('.') {
                return Err(self.validation_error(format!(
                    "script extension '{}' must not include the leading dot",
                    extension
                )));
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "registry"
    }
}

// Default value functions
fn default_script_extensions() -> Vec<String> {
    vec!["gd".to_string(), "cs".to_string()]
}
