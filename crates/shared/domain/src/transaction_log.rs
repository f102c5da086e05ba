//! Sinks receiving one line per successful account transaction.
//!
//! Sinks are injected into each [`BankAccount`](crate::BankAccount); nothing
//! here touches global logging state.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;

use crate::constants::{TRANSACTION_LOG_TARGET, TRANSACTION_LOG_TIME_FORMAT};

/// Destination for formatted transaction lines.
pub trait TransactionSink: Send + Sync {
    fn record(&self, line: &str);
}

/// Emits each line as an INFO event on the `transactions` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TransactionSink for TracingSink {
    fn record(&self, line: &str) {
        tracing::info!(target: TRANSACTION_LOG_TARGET, "{}", line);
    }
}

/// Appends timestamped lines to a file.
///
/// Lines look like `Jan 01, 2024 10:00:00 - Deposited 5.00. New balance: 5.00`.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let timestamp = Local::now().format(TRANSACTION_LOG_TIME_FORMAT);
        let mut file = self.file.lock().unwrap_or_else(|p| p.into_inner());
        writeln!(file, "{} - {}", timestamp, line)?;
        file.flush()
    }
}

impl TransactionSink for FileSink {
    fn record(&self, line: &str) {
        if let Err(e) = self.write_line(line) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to write transaction log"
            );
        }
    }
}

/// Keeps lines in memory; handy for inspection and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl TransactionSink for MemorySink {
    fn record(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(line.to_string());
    }
}
