//! Reload command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to re-read accounts from storage.
pub struct ReloadCommand;

impl Command for ReloadCommand {
    fn name(&self) -> &str {
        "reload"
    }

    fn description(&self) -> &str {
        "Re-read accounts from storage"
    }

    fn usage(&self) -> &str {
        "reload"
    }

    fn help(&self) -> &str {
        "Replace the accounts in memory with what is currently stored.\n\n\
         Picks up changes written by another session. If nothing is\n\
         stored, the accounts in memory are kept."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        match ctx.store.load_accounts() {
            Ok(()) => CommandResult::success(format!("{} accounts loaded", ctx.store.len())),
            Err(e) => CommandResult::error(format!("Failed to load accounts: {}", e)),
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
