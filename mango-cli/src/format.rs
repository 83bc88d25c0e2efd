//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors.

use colored::*;
use mango_core::Result;
use tabled::{settings::Style, Table, Tabled};

use crate::store::Task;

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format the task list
pub fn format_task_list(tasks: &[Task], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tasks)?),
        OutputFormat::Table => {
            if tasks.is_empty() {
                return Ok("No tasks".dimmed().to_string());
            }

            #[derive(Tabled)]
            struct TaskRow {
                #[tabled(rename = "ID")]
                id: String,
                #[tabled(rename = "Task")]
                title: String,
                #[tabled(rename = "Status")]
                status: String,
            }

            let rows: Vec<TaskRow> = tasks
                .iter()
                .map(|task| TaskRow {
                    id: format!("{}", task.id),
                    title: task.title.clone(),
                    status: if task.done {
                        "done".green().to_string()
                    } else {
                        "open".yellow().to_string()
                    },
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(table)
        }
    }
}

/// Format a success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}
