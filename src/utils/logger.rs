//! Logger utility for operation records
//!
//! This module provides a file-backed logger. One instance is borrowed by
//! commands to record what each operation produced; another can be
//! installed as the global `log` implementation when the user asks for a
//! log file instead of console logging.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::overlay::RegionSummary;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level accepted when used as the global logger
    level: Level,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level: Level::Debug,
        })
    }

    /// A logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            level: Level::Error,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs one line per composited region
    ///
    /// # Arguments
    ///
    /// * `summaries` - Results of an overlay run, in compositing order
    pub fn log_region_summaries(&self, summaries: &[RegionSummary]) -> io::Result<()> {
        self.log("Regions:")?;

        for summary in summaries {
            let message = format!(
                "  {}: {} px (+{} holes), boundary {} px, wrote {} fill / {} stripe / {} outline",
                summary.name,
                summary.pixels,
                summary.holes_added,
                summary.boundary_pixels,
                summary.stats.filled,
                summary.stats.striped,
                summary.stats.outlined
            );
            self.log(&message)?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger<P: AsRef<Path>>(log_file: P, level: LevelFilter) -> io::Result<()> {
        let mut global_logger = Logger::new(log_file)?;
        global_logger.level = level.to_level().unwrap_or(Level::Error);

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
