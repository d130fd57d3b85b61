//! Interactive shell over an [`AccountStore`].
//!
//! Every command that changes accounts goes straight through the store, which
//! saves on each mutation; the shell itself never writes account data.

pub mod command;
pub mod commands;
pub mod history;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::store::AccountStore;

use command::{CommandRegistry, CommandResult, ShellContext};
use commands::register_all;
use history::{HistoryConfig, HistoryFilter};

/// The prompt displayed to the user.
const PROMPT: &str = "acct> ";

/// Configuration for the shell.
pub struct ShellConfig {
    pub history: HistoryConfig,
    /// Whether to show the welcome message.
    pub show_welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            show_welcome: true,
        }
    }
}

/// The interactive shell.
pub struct Shell {
    registry: CommandRegistry,
    config: ShellConfig,
}

impl Shell {
    pub fn new() -> Self {
        Self::with_config(ShellConfig::default())
    }

    pub fn with_config(config: ShellConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        Self { registry, config }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub fn run(&self, store: &mut AccountStore) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        self.config.history.apply(&mut editor)?;
        let mut filter = HistoryFilter::new(self.config.history.clone());

        if self.config.show_welcome {
            println!(
                "{} accounts loaded. Type 'help' for available commands.",
                store.len()
            );
        }

        log::info!("Shell started");

        loop {
            match editor.readline(PROMPT) {
                Ok(raw) => {
                    if filter.should_add(&raw) {
                        let _ = editor.add_history_entry(raw.trim());
                    }

                    match self.execute_line(&raw, store) {
                        CommandResult::Success(Some(msg)) => println!("{}", msg),
                        CommandResult::Success(None) => {}
                        CommandResult::Error(msg) => eprintln!("Error: {}", msg),
                        CommandResult::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("exit");
                    log::info!("EOF received (Ctrl-D)");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {}", err);
                    log::error!("Readline error: {}", err);
                    break;
                }
            }
        }

        if let Err(e) = self.config.history.save(&mut editor) {
            log::warn!("Failed to save history: {}", e);
        }

        log::info!("Shell exited");
        Ok(())
    }

    /// Parses and executes one command line.
    pub fn execute_line(&self, line: &str, store: &mut AccountStore) -> CommandResult {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((cmd_name, args)) = parts.split_first() else {
            return CommandResult::ok();
        };

        let Some(cmd) = self.registry.get(cmd_name) else {
            return CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            ));
        };

        if let Some(usage_error) = cmd.check_arity(args) {
            return usage_error;
        }

        // Arguments may contain passwords, so only the command is logged
        log::debug!("Executing command: {} ({} args)", cmd.name(), args.len());

        let mut ctx = ShellContext::new(store).with_registry(&self.registry);
        let start = std::time::Instant::now();
        let result = cmd.execute(args, &mut ctx);
        log::debug!("Command '{}' completed in {:?}", cmd.name(), start.elapsed());
        result
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_shell_registers_commands() {
        let shell = Shell::new();
        assert_eq!(shell.registry.len(), 8);
    }

    #[test]
    fn test_execute_blank_line() {
        let shell = Shell::new();
        let mut store = AccountStore::new(MemoryStorage::new());

        assert!(matches!(
            shell.execute_line("   ", &mut store),
            CommandResult::Success(None)
        ));
    }

    #[test]
    fn test_execute_unknown_command() {
        let shell = Shell::new();
        let mut store = AccountStore::new(MemoryStorage::new());

        assert!(matches!(
            shell.execute_line("frobnicate", &mut store),
            CommandResult::Error(_)
        ));
    }

    #[test]
    fn test_execute_checks_arity() {
        let shell = Shell::new();
        let mut store = AccountStore::new(MemoryStorage::new());

        assert!(matches!(shell.execute_line("delete", &mut store), CommandResult::Error(_)));
        assert!(matches!(shell.execute_line("list extra", &mut store), CommandResult::Error(_)));
        assert!(matches!(shell.execute_line("update only_id ldap", &mut store), CommandResult::Error(_)));
    }

    #[test]
    fn test_execute_quit() {
        let shell = Shell::new();
        let mut store = AccountStore::new(MemoryStorage::new());

        assert!(matches!(shell.execute_line("exit", &mut store), CommandResult::Exit));
    }

    #[test]
    fn test_execute_add_then_list() {
        let shell = Shell::new();
        let mut store = AccountStore::new(MemoryStorage::new());

        let result = shell.execute_line("add ldap j.doe.corp work; vpn", &mut store);
        assert!(matches!(result, CommandResult::Success(_)));

        match shell.execute_line("ls", &mut store) {
            CommandResult::Success(Some(list)) => {
                assert!(list.contains("j.doe.corp"));
                assert!(list.contains("[work; vpn]"));
            }
            _ => panic!("Expected account list"),
        }
    }
}
