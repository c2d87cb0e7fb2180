//! Tabular export of a finished session.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use quiz_core::model::ResultRow;

mod csv_writer;
mod xlsx_writer;

pub use csv_writer::CsvReportWriter;
pub use xlsx_writer::XlsxReportWriter;

/// Header row shared by every report format.
pub const COLUMNS: [&str; 4] = ["Question", "YourAnswer", "CorrectAnswer", "Result"];

/// Worksheet name used by the xlsx writer.
pub const SHEET_NAME: &str = "Results";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("report writer unavailable: {0}")]
    Unavailable(String),
}

/// One exported row, serialized with the report's column names.
#[derive(Debug, Serialize)]
pub struct ReportRecord<'a> {
    #[serde(rename = "Question")]
    pub question: &'a str,
    #[serde(rename = "YourAnswer")]
    pub your_answer: &'a str,
    #[serde(rename = "CorrectAnswer")]
    pub correct_answer: &'a str,
    #[serde(rename = "Result")]
    pub result: &'a str,
}

impl<'a> From<&'a ResultRow> for ReportRecord<'a> {
    fn from(row: &'a ResultRow) -> Self {
        Self {
            question: &row.prompt,
            your_answer: row.answer_label(),
            correct_answer: &row.correct_answer,
            result: row.result_label(),
        }
    }
}

/// Sink for the per-question result rows.
pub trait ReportWriter: Send + Sync {
    /// Write `rows` to `destination`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the file cannot be produced.
    fn write_report(&self, rows: &[ResultRow], destination: &Path) -> Result<(), ExportError>;

    fn format(&self) -> ReportFormat;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    /// Fixed download name for this format.
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Xlsx => "test_results.xlsx",
            Self::Csv => "test_results.csv",
        }
    }

    #[must_use]
    pub fn writer(self) -> Arc<dyn ReportWriter> {
        match self {
            Self::Xlsx => Arc::new(XlsxReportWriter),
            Self::Csv => Arc::new(CsvReportWriter),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xlsx => f.write_str("xlsx"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown report format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for ReportFormat {
    type Err = UnknownFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

/// Captured export, as recorded by [`InMemoryReportWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub destination: PathBuf,
    pub rows: Vec<ResultRow>,
}

/// Report writer that keeps exports in memory, for tests.
#[derive(Clone, Default)]
pub struct InMemoryReportWriter {
    written: Arc<Mutex<Vec<WrittenReport>>>,
}

impl InMemoryReportWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Unavailable` if the lock is poisoned.
    pub fn written(&self) -> Result<Vec<WrittenReport>, ExportError> {
        let guard = self
            .written
            .lock()
            .map_err(|e| ExportError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }
}

impl ReportWriter for InMemoryReportWriter {
    fn write_report(&self, rows: &[ResultRow], destination: &Path) -> Result<(), ExportError> {
        let mut guard = self
            .written
            .lock()
            .map_err(|e| ExportError::Unavailable(e.to_string()))?;
        guard.push(WrittenReport {
            destination: destination.to_path_buf(),
            rows: rows.to_vec(),
        });
        Ok(())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Xlsx
    }
}
