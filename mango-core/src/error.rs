//! Error types for the mango task manager

use thiserror::Error;

/// Core error type for mango operations
#[derive(Error, Debug)]
pub enum Error {
    /// Command name not present in the registry
    #[error("{0} is not defined")]
    UnknownCommand(String),

    /// Empty argument vector handed to the dispatcher
    #[error("no command given")]
    MissingCommand,

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Task not found
    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for mango operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
