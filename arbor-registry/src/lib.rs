pub mod error;
pub mod loaders;
pub mod registry;
pub mod scanner;

// Re-export main types and traits
pub use error::{RegistryError, Result};
pub use loaders::{filesystem::FilesystemLister, DirectoryLister, ListedEntry};
pub use registry::TaskRegistry;
pub use scanner::{capitalize_category, MISC_CATEGORY};

pub mod prelude {
    pub use crate::{
        error::*, loaders::*, registry::TaskRegistry, scanner::MISC_CATEGORY,
    };
}
