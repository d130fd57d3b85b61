//! Help command implementation.

use crate::shell::command::{Command, CommandResult, ShellContext};

/// Command to display help information.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["h", "?"]
    }

    fn description(&self) -> &str {
        "Display help information"
    }

    fn usage(&self) -> &str {
        "help [command]"
    }

    fn help(&self) -> &str {
        "Without arguments, lists all commands.\n\
         With a command name, shows its usage and details.\n\n\
         Examples:\n  \
           help\n  \
           help add"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> CommandResult {
        let Some(registry) = ctx.registry else {
            return CommandResult::error("Help not available (no registry)");
        };

        let Some(cmd_name) = args.first() else {
            let mut commands: Vec<_> = registry.commands().collect();
            commands.sort_by(|a, b| a.name().cmp(b.name()));

            let lines: Vec<String> = commands
                .iter()
                .map(|cmd| {
                    let aliases = cmd.aliases();
                    let name = if aliases.is_empty() {
                        cmd.name().to_string()
                    } else {
                        format!("{} ({})", cmd.name(), aliases.join(", "))
                    };
                    format!("  {:<22} {}", name, cmd.description())
                })
                .collect();

            return CommandResult::success(format!(
                "Available commands:\n\n{}\n\nType 'help <command>' for details.",
                lines.join("\n")
            ));
        };

        match registry.get(cmd_name) {
            Some(cmd) => {
                let aliases = cmd.aliases();
                let alias_str = if aliases.is_empty() {
                    String::new()
                } else {
                    format!("\nAliases: {}", aliases.join(", "))
                };

                CommandResult::success(format!(
                    "{}\n\nUsage: {}{}\n\n{}",
                    cmd.name().to_uppercase(),
                    cmd.usage(),
                    alias_str,
                    cmd.help()
                ))
            }
            None => CommandResult::error(format!(
                "Unknown command: '{}'\nType 'help' to see available commands.",
                cmd_name
            )),
        }
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}
