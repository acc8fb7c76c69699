//! Append-only text log for diagnostics.
//!
//! One line per event: `YYYY-MM-DD HH:MM:SS - LEVEL - message`. The exact
//! formatting is not load-bearing; the file is for humans.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;

use stockroom_core::{DiagnosticSink, Level};

/// Default diagnostic log location.
pub const DEFAULT_LOG_PATH: &str = "inventory_log.txt";

/// Diagnostic sink appending leveled, timestamped lines to a text file.
///
/// Write failures are reported through `tracing` and otherwise swallowed:
/// the diagnostics channel never takes the store down.
pub struct FileSink {
    file: Mutex<fs::File>,
}

impl FileSink {
    /// Open (creating if necessary) the log file at `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl DiagnosticSink for FileSink {
    fn emit(&self, level: Level, message: &str) {
        let line = format!(
            "{} - {} - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        );

        match self.file.lock() {
            Ok(mut file) => {
                if let Err(err) = file.write_all(line.as_bytes()) {
                    tracing::error!("failed to append diagnostic log line: {err}");
                }
            }
            Err(_) => tracing::error!("diagnostic log mutex poisoned, line dropped"),
        }
    }
}
