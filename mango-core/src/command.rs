//! Command definitions for the dispatch registry

use crate::error::Result;

/// Handler invoked with the residual argument list after the command name
/// has been consumed.
pub type Handler = Box<dyn Fn(&[String]) -> Result<()>>;

/// A named, invocable unit: dispatch key, one usage line, and a handler.
pub struct Command {
    name: String,
    usage: String,
    run: Handler,
}

impl Command {
    /// Create a new command.
    ///
    /// Nothing is validated here; an empty name or a handler that always
    /// fails only surfaces when the command is executed.
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        run: impl Fn(&[String]) -> Result<()> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            run: Box::new(run),
        }
    }

    /// Get the dispatch name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the usage line
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Invoke the handler with `args`
    pub fn run(&self, args: &[String]) -> Result<()> {
        (self.run)(args)
    }
}
