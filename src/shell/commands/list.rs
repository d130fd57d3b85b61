//! List command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to list all accounts.
pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn aliases(&self) -> &[&str] {
        &["ls", "l"]
    }

    fn description(&self) -> &str {
        "List all accounts"
    }

    fn usage(&self) -> &str {
        "list"
    }

    fn help(&self) -> &str {
        "Display all accounts in the order they were added.\n\n\
         Passwords are not shown; use 'show <id>' for a single account."
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let accounts = ctx.store.accounts();
        if accounts.is_empty() {
            return CommandResult::success("No accounts stored.");
        }

        let output = accounts
            .iter()
            .map(|acc| {
                format!(
                    "{}  {:<5}  {}  [{}]",
                    acc.id,
                    acc.record_type,
                    acc.login,
                    acc.label_string()
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        log::debug!("Listed {} accounts", accounts.len());
        CommandResult::success(output)
    }

    fn max_args(&self) -> Option<usize> {
        Some(0)
    }
}
