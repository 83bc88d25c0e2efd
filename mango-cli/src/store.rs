//! On-disk task store
//!
//! Tasks are persisted as a JSON array in the task database file. Every
//! operation reads the whole file, applies the change, and writes it back;
//! a missing file is an empty store.

use std::path::{Path, PathBuf};

use mango_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One stored task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Stable numeric identifier
    pub id: u64,
    /// Human-entered description
    pub title: String,
    /// Whether the task has been completed
    pub done: bool,
}

/// Task store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store over the task database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks; a missing database file yields an empty list
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Write `tasks` back to the database file, creating parent directories
    /// as needed
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved task database");

        Ok(())
    }

    /// Append a new task with the next free id
    pub fn add(&self, title: impl Into<String>) -> Result<Task> {
        let mut tasks = self.load()?;

        let id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title: title.into(),
            done: false,
        };

        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Mark the task with `id` as done
    pub fn complete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.load()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        task.done = true;
        let task = task.clone();

        self.save(&tasks)?;
        Ok(task)
    }

    /// Delete the task with `id`
    pub fn remove(&self, id: u64) -> Result<Task> {
        let mut tasks = self.load()?;

        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        let task = tasks.remove(pos);

        self.save(&tasks)?;
        Ok(task)
    }

    /// Drop all completed tasks, returning how many were removed
    pub fn clear(&self) -> Result<usize> {
        let mut tasks = self.load()?;

        let before = tasks.len();
        tasks.retain(|t| !t.done);
        let removed = before - tasks.len();

        if removed > 0 {
            self.save(&tasks)?;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join(".mango.db"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (_dir, store) = temp_store();

        let first = store.add("write tests").unwrap();
        let second = store.add("ship release").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let tasks = store.load().unwrap();
        assert_eq!(tasks, vec![first, second]);
    }

    #[test]
    fn test_id_assignment_skips_removed_range() {
        let (_dir, store) = temp_store();

        store.add("one").unwrap();
        let second = store.add("two").unwrap();
        store.remove(1).unwrap();

        // Next id continues past the highest surviving id
        let third = store.add("three").unwrap();
        assert_eq!(third.id, second.id + 1);
    }

    #[test]
    fn test_complete_marks_done() {
        let (_dir, store) = temp_store();

        store.add("write tests").unwrap();
        let task = store.complete(1).unwrap();
        assert!(task.done);

        let tasks = store.load().unwrap();
        assert!(tasks[0].done);
    }

    #[test]
    fn test_complete_unknown_id() {
        let (_dir, store) = temp_store();
        let err = store.complete(42).unwrap_err();
        assert!(matches!(err, Error::TaskNotFound(42)));
    }

    #[test]
    fn test_remove_returns_the_task() {
        let (_dir, store) = temp_store();

        store.add("one").unwrap();
        store.add("two").unwrap();

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.title, "one");

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "two");
    }

    #[test]
    fn test_clear_drops_only_completed() {
        let (_dir, store) = temp_store();

        store.add("one").unwrap();
        store.add("two").unwrap();
        store.add("three").unwrap();
        store.complete(1).unwrap();
        store.complete(3).unwrap();

        assert_eq!(store.clear().unwrap(), 2);

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "two");

        // Nothing left to clear
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join("dir").join(".mango.db"));

        store.add("deep").unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
