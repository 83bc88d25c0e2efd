//! Subcommand registry and dispatcher
//!
//! Maps command names to [`Command`] entries and routes an argument vector
//! to the matching handler.

use std::collections::HashMap;

use crate::command::Command;
use crate::error::{Error, Result};

/// Registry managing the available subcommands
///
/// Populated once during startup, then only read. Lookup is by exact name;
/// iteration order of the underlying map is unspecified.
pub struct Registry {
    /// Map of command name to command
    commands: HashMap<String, Command>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its name.
    ///
    /// Registering a second command with the same name replaces the first;
    /// the last registration wins. The name is not checked for emptiness.
    pub fn add_command(&mut self, cmd: Command) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Usage text for every registered command: a leading newline, then one
    /// line per command in map order.
    pub fn usage(&self) -> String {
        let mut buf = String::from("\n");

        for cmd in self.commands.values() {
            buf.push_str(cmd.usage());
            buf.push('\n');
        }

        buf
    }

    /// Look up `args[0]` and run its handler with the remaining arguments.
    ///
    /// An empty `args` fails with [`Error::MissingCommand`]; an unregistered
    /// name fails with [`Error::UnknownCommand`] without invoking anything.
    /// Handler errors are returned to the caller untouched.
    pub fn execute(&self, args: &[String]) -> Result<()> {
        let (cmd_name, cmd_args) = match args.split_first() {
            Some((name, rest)) => (name, rest),
            None => return Err(Error::MissingCommand),
        };

        let cmd = self
            .commands
            .get(cmd_name)
            .ok_or_else(|| Error::UnknownCommand(cmd_name.clone()))?;

        cmd.run(cmd_args)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_execute_routes_residual_args_to_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_handler = Rc::clone(&seen);

        let mut registry = Registry::new();
        registry.add_command(Command::new(
            "ping",
            "ping - health check",
            move |args| {
                *seen_in_handler.borrow_mut() = args.to_vec();
                Ok(())
            },
        ));

        registry.execute(&args(&["ping"])).unwrap();
        assert!(seen.borrow().is_empty());

        registry.execute(&args(&["ping", "extra", "args"])).unwrap();
        assert_eq!(*seen.borrow(), args(&["extra", "args"]));
    }

    #[test]
    fn test_unknown_command_is_reported_and_nothing_runs() {
        let invoked = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&invoked);

        let mut registry = Registry::new();
        registry.add_command(Command::new("ping", "ping - health check", move |_| {
            *flag.borrow_mut() = true;
            Ok(())
        }));

        let err = registry.execute(&args(&["pong"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("pong"));
        assert!(message.contains("not defined"));
        assert!(matches!(err, Error::UnknownCommand(name) if name == "pong"));
        assert!(!*invoked.borrow());
    }

    #[test]
    fn test_duplicate_registration_last_wins() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&hits);
        let second = Rc::clone(&hits);

        let mut registry = Registry::new();
        registry.add_command(Command::new("build", "build - first", move |_| {
            first.borrow_mut().push("first");
            Ok(())
        }));
        registry.add_command(Command::new("build", "build - second", move |_| {
            second.borrow_mut().push("second");
            Ok(())
        }));

        assert_eq!(registry.len(), 1);
        registry.execute(&args(&["build"])).unwrap();
        assert_eq!(*hits.borrow(), vec!["second"]);
    }

    #[test]
    fn test_usage_aggregates_each_line_once() {
        let mut registry = Registry::new();
        for (name, usage) in [("x", "a"), ("y", "b"), ("z", "c")] {
            registry.add_command(Command::new(name, usage, |_| Ok(())));
        }

        let usage = registry.usage();
        assert!(usage.starts_with('\n'));

        let mut lines: Vec<&str> = usage[1..].lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_usage_on_empty_registry_is_single_newline() {
        assert_eq!(Registry::new().usage(), "\n");
    }

    #[test]
    fn test_handler_error_passes_through_unwrapped() {
        let mut registry = Registry::new();
        registry.add_command(Command::new("build", "build - compile", |_| {
            Err(Error::Other("disk full".to_string()))
        }));

        let err = registry.execute(&args(&["build"])).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_empty_args_is_missing_command() {
        let registry = Registry::new();
        assert!(matches!(registry.execute(&[]), Err(Error::MissingCommand)));
    }
}
