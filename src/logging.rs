//! Logging setup.
//!
//! Log records go to a file with timestamps and, when attached to a
//! terminal, warnings and errors are echoed to it as well.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum level written to the file.
    pub level: LevelFilter,
    /// Size in bytes past which the file is rotated on startup (0 = never).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("acctstore.log"),
            level: LevelFilter::Info,
            max_size: 5 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Whether the current log file is past `max_size`.
    fn needs_rotation(&self) -> bool {
        if self.max_size == 0 {
            return false;
        }
        std::fs::metadata(&self.path)
            .map(|m| m.len() > self.max_size)
            .unwrap_or(false)
    }
}

/// Installs the global logger.
///
/// Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if config.needs_rotation() {
        rotate_log(&config.path)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file {}: {}", config.path.display(), e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(config.level, file_config, log_file)];

    if std::env::var("TERM").is_ok() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    log::debug!("Log file: {}", config.path.display());

    Ok(())
}

/// Moves the log aside with a timestamp suffix, e.g. `acctstore.log.20260101_120000`.
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let rotated_path = rotated_name(path, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
    std::fs::rename(path, &rotated_path)?;
    Ok(rotated_path)
}

fn rotated_name(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("acctstore.log");
    path.with_file_name(format!("{}.{}", file_name, suffix))
}
