use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::file::FileSource;
use crate::http::HttpSource;
use crate::report::{InMemoryReportWriter, ReportFormat, ReportWriter};

/// Default question file, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "qa.csv";

/// Errors surfaced while reading the question source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("question source returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 6 columns, found {found}")]
    Malformed { line: u64, found: usize },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Where the question table is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(PathBuf),
    Http(String),
}

impl SourceLocation {
    /// `http://` and `https://` values select the HTTP source; anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_owned())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}

/// Contract for fetching the raw question table.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the raw comma-separated text.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the resource cannot be read.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Fixed in-memory source for tests and prototyping.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    text: Arc<str>,
}

impl InMemorySource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::from(text.into()),
        }
    }
}

#[async_trait]
impl QuestionSource for InMemorySource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.to_string())
    }

    fn describe(&self) -> String {
        "memory".to_owned()
    }
}

/// Aggregates the question source and report writer behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionSource>,
    pub reports: Arc<dyn ReportWriter>,
}

impl Storage {
    /// In-memory source paired with `reports`; keep a clone of the writer to
    /// inspect what was exported.
    #[must_use]
    pub fn in_memory(text: impl Into<String>, reports: InMemoryReportWriter) -> Self {
        let questions: Arc<dyn QuestionSource> = Arc::new(InMemorySource::new(text));
        let reports: Arc<dyn ReportWriter> = Arc::new(reports);
        Self { questions, reports }
    }

    /// Build storage for a file or HTTP source and a file-based report format.
    #[must_use]
    pub fn open(location: &SourceLocation, format: ReportFormat) -> Self {
        let questions: Arc<dyn QuestionSource> = match location {
            SourceLocation::File(path) => Arc::new(FileSource::new(path.clone())),
            SourceLocation::Http(url) => Arc::new(HttpSource::new(url.clone())),
        };
        Self {
            questions,
            reports: format.writer(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_detects_http() {
        assert_eq!(
            SourceLocation::parse("https://example.com/qa.csv"),
            SourceLocation::Http("https://example.com/qa.csv".into())
        );
        assert_eq!(
            SourceLocation::parse(" data/qa.csv "),
            SourceLocation::File(PathBuf::from("data/qa.csv"))
        );
    }

    #[test]
    fn default_location_is_qa_csv() {
        assert_eq!(SourceLocation::default().to_string(), DEFAULT_SOURCE);
    }

    #[tokio::test]
    async fn in_memory_source_returns_text() {
        let source = InMemorySource::new("a,b,c,d,e,b\n");
        assert_eq!(source.fetch().await.unwrap(), "a,b,c,d,e,b\n");
    }

    #[tokio::test]
    async fn in_memory_storage_shares_the_writer() {
        let reports = InMemoryReportWriter::new();
        let storage = Storage::in_memory("a,b,c,d,e,b\n", reports.clone());

        assert_eq!(storage.questions.fetch().await.unwrap(), "a,b,c,d,e,b\n");
        storage
            .reports
            .write_report(&[], std::path::Path::new("out.xlsx"))
            .unwrap();
        assert_eq!(reports.written().unwrap().len(), 1);
    }

    #[test]
    fn storage_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Storage>();
    }
}
