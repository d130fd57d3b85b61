//! Acctstore - account records with snapshot persistence.
//!
//! This library keeps an ordered list of accounts in memory, writes the whole
//! list to key-value storage on every change, and provides the field checks a
//! form needs before handing an account to the store.

pub mod account;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod storage;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use account::{Account, AccountInput, Label, RecordType};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use logging::{LogConfig, init_logging};
pub use shell::Shell;
pub use storage::{ACCOUNTS_KEY, FileStorage, KeyValueStorage, MemoryStorage};
pub use store::AccountStore;
pub use validation::{
    ValidationError, is_label_invalid, is_login_invalid, is_password_invalid, parse_labels,
    validate_input,
};
