//! Command history.
//!
//! Lines that carry a password on the command line are never written to
//! history.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::config::Configurer;
use std::path::PathBuf;

/// Commands whose arguments may include a password.
const SECRET_COMMANDS: &[&str] = &["add", "a", "new", "update", "edit", "u"];

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
    /// Skip an entry equal to the previous one.
    pub ignore_dups: bool,
    /// Skip entries typed with a leading space.
    pub ignore_space: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 500,
            ignore_dups: true,
            ignore_space: true,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    pub fn with_ignore_dups(mut self, ignore: bool) -> Self {
        self.ignore_dups = ignore;
        self
    }

    /// Sets the size limit and loads any saved history into `editor`.
    pub fn apply(&self, editor: &mut DefaultEditor) -> Result<()> {
        editor.set_max_history_size(self.max_entries)?;

        if self.path.exists() {
            if let Err(e) = editor.load_history(&self.path) {
                log::warn!("Could not load history: {}", e);
            } else {
                log::debug!("Loaded history from {}", self.path.display());
            }
        }

        Ok(())
    }

    pub fn save(&self, editor: &mut DefaultEditor) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        editor.save_history(&self.path)?;
        log::debug!("Saved history to {}", self.path.display());
        Ok(())
    }
}

/// Decides which entered lines go into history.
pub struct HistoryFilter {
    config: HistoryConfig,
    last_entry: Option<String>,
}

impl HistoryFilter {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            last_entry: None,
        }
    }

    /// `raw` is the line as typed, before trimming.
    pub fn should_add(&mut self, raw: &str) -> bool {
        if self.config.ignore_space && raw.starts_with(char::is_whitespace) {
            return false;
        }

        let entry = raw.trim();
        if entry.is_empty() || carries_password(entry) {
            return false;
        }

        if self.config.ignore_dups && self.last_entry.as_deref() == Some(entry) {
            return false;
        }

        self.last_entry = Some(entry.to_string());
        true
    }
}

/// `add local <login> <password> ...` and `update <id> local <login> <password> ...`
fn carries_password(line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return false;
    };
    if !SECRET_COMMANDS.contains(&cmd) {
        return false;
    }

    let is_update = matches!(cmd, "update" | "edit" | "u");
    let type_arg = if is_update { parts.nth(1) } else { parts.next() };
    type_arg.is_some_and(|t| t.eq_ignore_ascii_case("local"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_builder() {
        let config = HistoryConfig::new(PathBuf::from("/tmp/history"))
            .with_max_entries(50)
            .with_ignore_dups(false);

        assert_eq!(config.path, PathBuf::from("/tmp/history"));
        assert_eq!(config.max_entries, 50);
        assert!(!config.ignore_dups);
        assert!(config.ignore_space);
    }

    #[test]
    fn test_filter_skips_blank_and_leading_space() {
        let mut filter = HistoryFilter::new(HistoryConfig::default());

        assert!(!filter.should_add(""));
        assert!(!filter.should_add("   "));
        assert!(!filter.should_add(" list"));
        assert!(filter.should_add("list"));
    }

    #[test]
    fn test_filter_duplicates() {
        let mut filter = HistoryFilter::new(HistoryConfig::default());

        assert!(filter.should_add("list"));
        assert!(!filter.should_add("list"));
        assert!(filter.should_add("show abc"));
        assert!(filter.should_add("list"));

        let mut filter = HistoryFilter::new(HistoryConfig::default().with_ignore_dups(false));
        assert!(filter.should_add("list"));
        assert!(filter.should_add("list"));
    }

    #[test]
    fn test_filter_skips_lines_with_passwords() {
        let mut filter = HistoryFilter::new(HistoryConfig::default());

        assert!(!filter.should_add("add local jdoe_admin s3cretpass work"));
        assert!(!filter.should_add("update 1f2e LOCAL jdoe_admin s3cretpass"));
        assert!(filter.should_add("add ldap jdoe_admin work"));
        assert!(filter.should_add("update 1f2e ldap jdoe_admin"));
        assert!(filter.should_add("delete 1f2e"));
    }
}
