use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to list \"{path}\" directory: {source}")]
    DirectoryList {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
