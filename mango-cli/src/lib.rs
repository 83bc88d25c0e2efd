//! Mango CLI Library
//!
//! This library provides the functionality behind the `mango` binary: CLI
//! configuration, the on-disk task store, subcommand handlers, and output
//! formatting.
//!
//! # Public API
//!
//! The primary public API is [`cli::register_commands`], which populates a
//! [`mango_core::Registry`] with the task subcommands, together with
//! [`store::TaskStore`] for programmatic access to the task database.
//!
//! ```no_run
//! use mango_cli::cli::{register_commands, CliContext};
//! use mango_cli::format::OutputFormat;
//! use mango_cli::store::TaskStore;
//! use mango_core::Registry;
//!
//! # fn example() -> anyhow::Result<()> {
//! let ctx = CliContext::new(TaskStore::new("/tmp/.mango.db"), OutputFormat::Table);
//! let mut registry = Registry::new();
//! register_commands(&mut registry, &ctx);
//!
//! registry.execute(&["list".to_string()])?;
//! # Ok(())
//! # }
//! ```

/// Subcommand registration and handlers.
pub mod cli;

/// Configuration types for the CLI tool.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

/// On-disk task store.
pub mod store;
