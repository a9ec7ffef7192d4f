//! History log: append-only plain-text records of completed calculations.
//!
//! One line per successful calculation, `[YYYY-MM-DD HH:MM] expr = result`.
//! The file is opened, appended, and closed per record — no handle is
//! held across loop iterations. Append failures are invisible to the
//! user; explicit reads (the `history` subcommand) surface typed errors.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::calc::{self, Operation};
use crate::constants::HISTORY_TIME_FORMAT;

/// Errors reading the history file back.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("не удалось прочитать файл истории {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append-only calculation log at a fixed path.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one completed calculation.
    ///
    /// Never fails from the caller's point of view: an unwritable file
    /// drops the record with only a debug log entry.
    pub fn append(&self, op: Operation, a: f64, b: f64, result: f64) {
        let Some(line) = render_record(op, a, b, result, Local::now()) else {
            return;
        };
        if let Err(e) = self.try_append(&line) {
            log::debug!("history record dropped ({}): {e}", self.path.display());
        }
    }

    fn try_append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }

    /// All recorded lines, oldest first. A missing file is an empty log.
    pub fn entries(&self) -> Result<Vec<String>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| HistoryError::ReadFile {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Number of recorded calculations.
    pub fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.entries()?.len())
    }
}

/// Render one history line with the given timestamp.
///
/// `None` for operations that are never logged (Exit).
pub fn render_record(
    op: Operation,
    a: f64,
    b: f64,
    result: f64,
    at: DateTime<Local>,
) -> Option<String> {
    let expr = calc::render_expression(op, a, b)?;
    Some(format!(
        "[{}] {expr} = {result}",
        at.format(HISTORY_TIME_FORMAT)
    ))
}
