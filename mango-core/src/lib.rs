//! Mango Core Library
//!
//! Shared building blocks for the mango task manager: the subcommand
//! registry/dispatcher, the error taxonomy, and task database path
//! resolution. This crate is used by the CLI binary and by anything else
//! embedding the dispatcher.

pub mod command;
pub mod error;
pub mod paths;
pub mod registry;

// Re-export commonly used types
pub use command::Command;
pub use error::*;
pub use paths::{resolve_db_path, user_db_path, EnvSource, SystemEnv, DB_FILE_NAME};
pub use registry::Registry;
