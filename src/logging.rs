use chrono::Local;
use log::{Level, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

use crate::error::LoggingError;

pub const LOG_FILE: &str = "log.txt";

#[derive(Debug)]
struct FileLogger {
    log_path: PathBuf,
    level: Level,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "[{}] {} {} - {}\n",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            );
            let log_file = self.log_path.join(LOG_FILE);

            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger writing to `<log_path>/log.txt`.
///
/// Fails when the directory cannot be created. Only the first successful call
/// configures the destination; later calls fail because a logger is already installed.
pub fn init(log_path: impl Into<PathBuf>, level: Level) -> Result<(), LoggingError> {
    let log_path = log_path.into();
    create_dir_all(&log_path)?;

    let logger = LOGGER.get_or_init(|| FileLogger { log_path, level });

    log::set_logger(logger)?;
    log::set_max_level(logger.level.to_level_filter());
    Ok(())
}
