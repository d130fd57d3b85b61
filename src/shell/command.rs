//! Command trait and registry for the shell.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::store::AccountStore;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub enum CommandResult {
    /// Command executed successfully with optional message.
    Success(Option<String>),
    /// Command failed with error message.
    Error(String),
    /// Signal to exit the shell.
    Exit,
}

impl CommandResult {
    pub fn success(msg: impl Into<String>) -> Self {
        CommandResult::Success(Some(msg.into()))
    }

    pub fn ok() -> Self {
        CommandResult::Success(None)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        CommandResult::Error(msg.into())
    }
}

/// Context available to commands during execution.
pub struct ShellContext<'a> {
    /// The store commands read from and mutate.
    pub store: &'a mut AccountStore,
    /// Reference to the command registry for the help command.
    pub registry: Option<&'a CommandRegistry>,
}

impl<'a> ShellContext<'a> {
    pub fn new(store: &'a mut AccountStore) -> Self {
        Self {
            store,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: &'a CommandRegistry) -> Self {
        self.registry = Some(registry);
        self
    }
}

/// A command that can be executed in the shell.
pub trait Command: Send + Sync {
    /// Returns the primary name of the command.
    fn name(&self) -> &str;

    /// Returns command aliases (alternative names).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Returns a short description of the command.
    fn description(&self) -> &str;

    /// Returns usage information (e.g., "delete <id>").
    fn usage(&self) -> &str;

    /// Returns detailed help text.
    fn help(&self) -> &str {
        self.description()
    }

    /// Executes the command. Argument counts are already checked against
    /// [`min_args`](Self::min_args) and [`max_args`](Self::max_args).
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult;

    fn min_args(&self) -> usize {
        0
    }

    /// None = unlimited.
    fn max_args(&self) -> Option<usize> {
        None
    }

    /// Checks the argument count, returning a usage error if it is off.
    fn check_arity(&self, args: &[&str]) -> Option<CommandResult> {
        if args.len() < self.min_args() {
            return Some(CommandResult::error(format!(
                "Usage: {}\nMissing required arguments",
                self.usage()
            )));
        }
        if self.max_args().is_some_and(|max| args.len() > max) {
            return Some(CommandResult::error(format!(
                "Usage: {}\nToo many arguments",
                self.usage()
            )));
        }
        None
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("description", &self.description())
            .finish()
    }
}

/// Registry of all available commands.
pub struct CommandRegistry {
    /// Commands indexed by their primary name.
    commands: HashMap<String, Arc<dyn Command>>,
    /// Alias to primary name mapping.
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_string();
        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.commands.insert(name, command);
    }

    /// Looks up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(Arc::clone(cmd));
        }

        self.aliases
            .get(name)
            .and_then(|primary| self.commands.get(primary))
            .map(Arc::clone)
    }

    pub fn commands(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
