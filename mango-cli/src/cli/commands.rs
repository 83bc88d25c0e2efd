//! Subcommand registration for the dispatch registry

use mango_core::{Command, Registry};

use crate::format::OutputFormat;
use crate::store::TaskStore;

use super::handlers::*;

/// Collaborators captured by every registered handler
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Task database
    pub store: TaskStore,
    /// Output format for list-style commands
    pub format: OutputFormat,
}

impl CliContext {
    /// Create a new context
    pub fn new(store: TaskStore, format: OutputFormat) -> Self {
        Self { store, format }
    }
}

const HELP_USAGE: &str = "help              - show this message";

/// Register every mango subcommand against `registry`.
///
/// Each handler captures its own clone of `ctx`; the registry itself stays
/// free of any task-store knowledge.
pub fn register_commands(registry: &mut Registry, ctx: &CliContext) {
    let add_ctx = ctx.clone();
    registry.add_command(Command::new(
        "add",
        "add <title>...    - add a new task",
        move |args| handle_add(&add_ctx, args),
    ));

    let list_ctx = ctx.clone();
    registry.add_command(Command::new(
        "list",
        "list              - list all tasks",
        move |args| handle_list(&list_ctx, args),
    ));

    let done_ctx = ctx.clone();
    registry.add_command(Command::new(
        "done",
        "done <id>         - mark a task as done",
        move |args| handle_done(&done_ctx, args),
    ));

    let rm_ctx = ctx.clone();
    registry.add_command(Command::new(
        "rm",
        "rm <id>           - delete a task",
        move |args| handle_remove(&rm_ctx, args),
    ));

    let clear_ctx = ctx.clone();
    registry.add_command(Command::new(
        "clear",
        "clear             - remove completed tasks",
        move |args| handle_clear(&clear_ctx, args),
    ));

    // Registered last so its text covers every other command; the usage
    // aggregation itself stays inside the registry.
    let mut help_text = registry.usage();
    help_text.push_str(HELP_USAGE);
    help_text.push('\n');
    registry.add_command(Command::new("help", HELP_USAGE, move |_args| {
        print!("{}", help_text);
        Ok(())
    }));
}
