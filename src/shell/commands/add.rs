//! Add command implementation.

use crate::account::{AccountInput, RecordType, generate_id};
use crate::shell::command::{Command, CommandResult, ShellContext};
use crate::validation::validate_input;

use super::describe_errors;

/// Command to add a new account.
pub struct AddCommand;

/// Reads `<type> <login> [password] [labels...]` into a form.
///
/// Only Local accounts take a password argument; everything after it is
/// rejoined as the label string.
pub(super) fn parse_input(args: &[&str]) -> Result<AccountInput, String> {
    let (type_arg, rest) = args.split_first().ok_or("Missing record type")?;
    let record_type: RecordType = type_arg.parse()?;
    let (login, rest) = rest.split_first().ok_or("Missing login")?;

    let (password, labels) = match record_type {
        RecordType::Local => match rest.split_first() {
            Some((password, labels)) => (password.to_string(), labels),
            None => (String::new(), rest),
        },
        RecordType::Ldap => (String::new(), rest),
    };

    Ok(AccountInput {
        label: labels.join(" "),
        record_type,
        login: login.to_string(),
        password,
    })
}

impl Command for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn aliases(&self) -> &[&str] {
        &["a", "new"]
    }

    fn description(&self) -> &str {
        "Add a new account"
    }

    fn usage(&self) -> &str {
        "add <ldap|local> <login> [password] [labels...]"
    }

    fn help(&self) -> &str {
        "Add a new account to the store.\n\n\
         Arguments:\n  \
           <ldap|local> - Where the account authenticates\n  \
           <login>      - Login name (8-100 characters)\n  \
           [password]   - Local accounts only (8-100 characters)\n  \
           [labels...]  - Labels separated by ';' (at most 50 characters)\n\n\
         Examples:\n  \
           add ldap j.doe.corp work; vpn\n  \
           add local backup_admin s3cretpass servers"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let input = match parse_input(args) {
            Ok(input) => input,
            Err(e) => return CommandResult::error(format!("{}\nUsage: {}", e, self.usage())),
        };

        if let Err(errors) = validate_input(&input) {
            log::debug!("Rejected new account: {:?}", errors);
            return CommandResult::error(describe_errors(&errors));
        }

        let id = generate_id();
        match ctx.store.add_account(input.into_account(id.clone())) {
            Ok(()) => CommandResult::success(format!("Added account {}", id)),
            Err(e) => CommandResult::error(format!("Failed to save accounts: {}", e)),
        }
    }

    fn min_args(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::AccountStore;

    #[test]
    fn test_parse_local_input() {
        let input = parse_input(&["local", "backup_admin", "s3cretpass", "servers;", "prod"]).unwrap();

        assert_eq!(input.record_type, RecordType::Local);
        assert_eq!(input.login, "backup_admin");
        assert_eq!(input.password, "s3cretpass");
        assert_eq!(input.label, "servers; prod");
    }

    #[test]
    fn test_parse_ldap_input_has_no_password() {
        let input = parse_input(&["LDAP", "j.doe.corp", "work;vpn"]).unwrap();

        assert_eq!(input.record_type, RecordType::Ldap);
        assert_eq!(input.password, "");
        assert_eq!(input.label, "work;vpn");
    }

    #[test]
    fn test_parse_bad_type() {
        assert!(parse_input(&["kerberos", "j.doe.corp"]).is_err());
        assert!(parse_input(&["ldap"]).is_err());
    }

    #[test]
    fn test_add_command_success() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        let mut ctx = ShellContext::new(&mut store);

        let result = AddCommand.execute(&["local", "backup_admin", "s3cretpass", "servers"], &mut ctx);

        assert!(matches!(result, CommandResult::Success(Some(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.accounts()[0].password.as_deref(), Some("s3cretpass"));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_add_command_rejects_invalid_fields() {
        let storage = MemoryStorage::new();
        let mut store = AccountStore::new(storage.clone());
        let mut ctx = ShellContext::new(&mut store);

        let result = AddCommand.execute(&["local", "short", "tiny"], &mut ctx);

        match result {
            CommandResult::Error(msg) => {
                assert!(msg.contains("login"));
                assert!(msg.contains("password"));
            }
            _ => panic!("Expected validation error"),
        }
        assert!(store.is_empty());
        assert_eq!(storage.writes(), 0);
    }
}
