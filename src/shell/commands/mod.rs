//! Individual command implementations.

mod add;
mod delete;
mod help;
mod list;
mod quit;
mod reload;
mod show;
mod update;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use quit::QuitCommand;
pub use reload::ReloadCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;

use std::sync::Arc;

use super::command::CommandRegistry;
use crate::validation::ValidationError;

/// Registers all built-in commands with the registry.
pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(Arc::new(AddCommand));
    registry.register(Arc::new(UpdateCommand));
    registry.register(Arc::new(DeleteCommand));
    registry.register(Arc::new(ListCommand));
    registry.register(Arc::new(ShowCommand));
    registry.register(Arc::new(ReloadCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(QuitCommand));
}

/// One line per failed field, e.g. `login: Login must be 8-100 characters`.
fn describe_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e.message()))
        .collect::<Vec<_>>()
        .join("\n")
}
