//! Subcommand execution handlers

use mango_core::{Error, Result};

use crate::format::{format_success, format_task_list};

use super::commands::CliContext;

/// Handle the `add` command
pub fn handle_add(ctx: &CliContext, args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(Error::InvalidInput("add needs a task title".to_string()));
    }

    let title = args.join(" ");
    let task = ctx.store.add(title)?;
    println!(
        "{}",
        format_success(&format!("Added task {}: {}", task.id, task.title))
    );

    Ok(())
}

/// Handle the `list` command
pub fn handle_list(ctx: &CliContext, _args: &[String]) -> Result<()> {
    let tasks = ctx.store.load()?;
    println!("{}", format_task_list(&tasks, &ctx.format)?);

    Ok(())
}

/// Handle the `done` command
pub fn handle_done(ctx: &CliContext, args: &[String]) -> Result<()> {
    let id = parse_id(args)?;
    let task = ctx.store.complete(id)?;
    println!(
        "{}",
        format_success(&format!("Completed task {}: {}", task.id, task.title))
    );

    Ok(())
}

/// Handle the `rm` command
pub fn handle_remove(ctx: &CliContext, args: &[String]) -> Result<()> {
    let id = parse_id(args)?;
    let task = ctx.store.remove(id)?;
    println!(
        "{}",
        format_success(&format!("Deleted task {}: {}", task.id, task.title))
    );

    Ok(())
}

/// Handle the `clear` command
pub fn handle_clear(ctx: &CliContext, _args: &[String]) -> Result<()> {
    let removed = ctx.store.clear()?;
    println!(
        "{}",
        format_success(&format!("Removed {} completed task(s)", removed))
    );

    Ok(())
}

fn parse_id(args: &[String]) -> Result<u64> {
    let raw = args
        .first()
        .ok_or_else(|| Error::InvalidInput("a task id is required".to_string()))?;

    raw.parse()
        .map_err(|_| Error::InvalidInput(format!("invalid task id: {}", raw)))
}
