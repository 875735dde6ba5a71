// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use thiserror::Error;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Appends every record to the debug log; warnings and errors also go to stderr.
pub struct FileLogger {
    path: PathBuf,
    level: LevelFilter,
    lock: Mutex<()>,
}

impl FileLogger {
    fn line(level: Level, msg: &std::fmt::Arguments) -> String {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        format!("[{elapsed}][{level}] {msg}\n")
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::line(record.level(), record.args());

        if record.level() <= Level::Warn {
            eprint!("{line}");
        }

        if let Ok(_guard) = self.lock.lock() {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

#[derive(Error, Debug)]
pub enum LogInitError {
    #[error("cannot create log directory {path}: {source}")]
    Directory { path: String, source: std::io::Error },

    #[error(transparent)]
    Install(#[from] SetLoggerError),
}

/// Log file inside `dir`, creating the directory if needed.
fn log_path(dir: &Path) -> Result<PathBuf, LogInitError> {
    fs::create_dir_all(dir).map_err(|source| LogInitError::Directory {
        path: dir.display().to_string(),
        source,
    })?;
    Ok(dir.join(LOG_FILE))
}

/// Install the file sink. Safe to call once per process; later calls fail with
/// `LogInitError::Install`.
pub fn init(level: LevelFilter) -> Result<(), LogInitError> {
    start();
    let path = log_path(Path::new(STORE_DIR))?;

    let logger = LOGGER.get_or_init(|| FileLogger {
        path,
        level,
        lock: Mutex::new(()),
    });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
