//! Quit command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to leave the shell.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "q"]
    }

    fn description(&self) -> &str {
        "Leave the shell"
    }

    fn usage(&self) -> &str {
        "quit"
    }

    fn help(&self) -> &str {
        "Leave the shell. Every change is already saved when it is made,\n\
         so nothing is written on exit."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        log::info!("Leaving shell with {} accounts", ctx.store.len());
        CommandResult::Exit
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::AccountStore;

    #[test]
    fn test_quit_command_writes_nothing() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        let mut ctx = ShellContext::new(&mut store);

        assert!(matches!(QuitCommand.execute(&[], &mut ctx), CommandResult::Exit));
        assert_eq!(storage.writes(), 0);
    }
}
