//! Task database path resolution
//!
//! Resolves the per-user location of the task database from environment
//! variables only. No filesystem access is performed and the result is not
//! validated; an unusable path surfaces later when the store touches it.

use std::path::PathBuf;

/// File name of the task database under the user's home directory.
pub const DB_FILE_NAME: &str = ".mango.db";

/// Read access to process environment variables.
///
/// Path resolution never touches `std::env` directly; tests inject a fake
/// source instead.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the process environment.
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Returns the task database path for the current user.
///
/// - Windows: `HOMEDRIVE` and `HOMEPATH` concatenated, falling back to
///   `USERPROFILE` when that concatenation is empty. The result is returned
///   as-is, even when empty.
/// - Elsewhere: `HOME` joined with [`DB_FILE_NAME`].
///
/// Pure function of the environment at call time.
pub fn resolve_db_path(env: &dyn EnvSource) -> PathBuf {
    if cfg!(windows) {
        windows_db_path(env)
    } else {
        unix_db_path(env)
    }
}

/// Convenience wrapper over [`resolve_db_path`] using the process
/// environment.
pub fn user_db_path() -> PathBuf {
    resolve_db_path(&SystemEnv)
}

fn windows_db_path(env: &dyn EnvSource) -> PathBuf {
    let mut home = format!(
        "{}{}",
        env.var("HOMEDRIVE").unwrap_or_default(),
        env.var("HOMEPATH").unwrap_or_default()
    );

    if home.is_empty() {
        home = env.var("USERPROFILE").unwrap_or_default();
    }

    PathBuf::from(home)
}

fn unix_db_path(env: &dyn EnvSource) -> PathBuf {
    PathBuf::from(env.var("HOME").unwrap_or_default()).join(DB_FILE_NAME)
}
