//! Delete command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to delete accounts by id.
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn name(&self) -> &str {
        "delete"
    }

    fn aliases(&self) -> &[&str] {
        &["rm", "del"]
    }

    fn description(&self) -> &str {
        "Delete accounts by id"
    }

    fn usage(&self) -> &str {
        "delete <id>"
    }

    fn help(&self) -> &str {
        "Delete every account with the given id.\n\n\
         Examples:\n  \
           delete 3f9a0c\n  \
           rm 3f9a0c"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let id = args[0];

        match ctx.store.delete_account(id) {
            Ok(0) => CommandResult::error(format!("Account '{}' not found", id)),
            Ok(1) => CommandResult::success(format!("Deleted account {}", id)),
            Ok(n) => CommandResult::success(format!("Deleted {} accounts with id {}", n, id)),
            Err(e) => CommandResult::error(format!("Failed to save accounts: {}", e)),
        }
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
