//! Show command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to display one account in full.
pub struct ShowCommand;

impl Command for ShowCommand {
    fn name(&self) -> &str {
        "show"
    }

    fn aliases(&self) -> &[&str] {
        &["get", "g"]
    }

    fn description(&self) -> &str {
        "Show an account, including its password"
    }

    fn usage(&self) -> &str {
        "show <id>"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let id = args[0];

        match ctx.store.find(id) {
            Some(acc) => CommandResult::success(format!(
                "id:       {}\ntype:     {}\nlogin:    {}\npassword: {}\nlabels:   {}",
                acc.id,
                acc.record_type,
                acc.login,
                acc.password.as_deref().unwrap_or("-"),
                acc.label_string()
            )),
            None => CommandResult::error(format!("Account '{}' not found", id)),
        }
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{AccountInput, RecordType};
    use crate::storage::MemoryStorage;
    use crate::store::AccountStore;

    #[test]
    fn test_show_command() {
        let mut store = AccountStore::new(MemoryStorage::new());
        let input = AccountInput {
            label: "ops".to_string(),
            record_type: RecordType::Local,
            login: "backup_admin".to_string(),
            password: "s3cretpass".to_string(),
        };
        store.add_account(input.into_account("abc")).unwrap();
        let mut ctx = ShellContext::new(&mut store);

        match ShowCommand.execute(&["abc"], &mut ctx) {
            CommandResult::Success(Some(msg)) => {
                assert!(msg.contains("backup_admin"));
                assert!(msg.contains("s3cretpass"));
                assert!(msg.contains("Local"));
            }
            _ => panic!("Expected account details"),
        }

        assert!(matches!(
            ShowCommand.execute(&["nope"], &mut ctx),
            CommandResult::Error(_)
        ));
    }
}
