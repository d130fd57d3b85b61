//! Update command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::validation::validate_input;

use super::add::parse_input;
use super::describe_errors;

/// Command to replace an existing account.
pub struct UpdateCommand;

impl Command for UpdateCommand {
    fn name(&self) -> &str {
        "update"
    }

    fn aliases(&self) -> &[&str] {
        &["edit", "u"]
    }

    fn description(&self) -> &str {
        "Replace an account's fields"
    }

    fn usage(&self) -> &str {
        "update <id> <ldap|local> <login> [password] [labels...]"
    }

    fn help(&self) -> &str {
        "Replace the account with the given id, keeping its position.\n\n\
         All fields are replaced; arguments are the same as for 'add'.\n\
         If several accounts share the id, only the first is replaced.\n\n\
         Examples:\n  \
           update 3f9a0c ldap j.doe.corp work\n  \
           edit 3f9a0c local backup_admin n3wpassword"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let id = args[0];
        let input = match parse_input(&args[1..]) {
            Ok(input) => input,
            Err(e) => return CommandResult::error(format!("{}\nUsage: {}", e, self.usage())),
        };

        if let Err(errors) = validate_input(&input) {
            return CommandResult::error(describe_errors(&errors));
        }

        match ctx.store.update_account(id, input.into_account(id)) {
            Ok(true) => CommandResult::success(format!("Updated account {}", id)),
            Ok(false) => CommandResult::error(format!("Account '{}' not found", id)),
            Err(e) => CommandResult::error(format!("Failed to save accounts: {}", e)),
        }
    }

    fn min_args(&self) -> usize {
        3
    }
}
