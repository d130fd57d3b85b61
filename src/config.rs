use anyhow::{Result, anyhow};
use std::path::PathBuf;

use crate::logging::LogConfig;
use crate::shell::history::HistoryConfig;
use crate::storage::FileStorage;

const APP_DIR: &str = ".acctstore";

/// Where the application keeps its data, log and shell history.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log: LogConfig,
    pub history: HistoryConfig,
}

impl AppConfig {
    /// Roots everything under `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            log: LogConfig::new(data_dir.join("acctstore.log")),
            history: HistoryConfig::new(data_dir.join("history")),
            data_dir,
        }
    }

    /// `~/.acctstore`
    pub fn default_location() -> Result<Self> {
        let home = dirs_next::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        Ok(Self::with_data_dir(home.join(APP_DIR)))
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }

    /// File-backed storage inside the data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}
