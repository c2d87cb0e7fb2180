use rand::Rng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use quiz_core::Clock;
use quiz_core::model::QuestionBank;
use quiz_core::selector::{SelectError, SessionSelector};
use storage::report::ReportWriter;
use storage::repository::QuestionSource;
use storage::rows::load_records;

use super::service::QuizSession;
use crate::error::{ExportError, LoadError, SessionError};

/// Orchestrates bank loading, session creation and report export.
///
/// Holds no session state; every call to [`start_session`](Self::start_session)
/// returns an independent [`QuizSession`].
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<dyn QuestionSource>,
    reports: Arc<dyn ReportWriter>,
    selector: SessionSelector,
    report_path: PathBuf,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        questions: Arc<dyn QuestionSource>,
        reports: Arc<dyn ReportWriter>,
    ) -> Self {
        let report_path = PathBuf::from(reports.format().default_file_name());
        Self {
            clock,
            questions,
            reports,
            selector: SessionSelector::default(),
            report_path,
        }
    }

    #[must_use]
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Override the number of questions per session.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::InvalidSessionSize` when `size` is zero.
    pub fn with_session_size(mut self, size: usize) -> Result<Self, SelectError> {
        self.selector = SessionSelector::new(size)?;
        Ok(self)
    }

    #[must_use]
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    #[must_use]
    pub fn session_size(&self) -> usize {
        self.selector.size()
    }

    /// Fetch and parse the question bank.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Source` if the source cannot be read or parsed and
    /// `LoadError::EmptyBank` if it holds no questions.
    pub async fn load_bank(&self) -> Result<QuestionBank, LoadError> {
        let records = load_records(self.questions.as_ref()).await?;
        let bank = QuestionBank::from_records(records).map_err(|_| LoadError::EmptyBank)?;
        for (index, question) in bank.mismatched() {
            warn!(
                index,
                prompt = question.prompt(),
                "correct answer does not match exactly one option"
            );
        }
        info!(count = bank.len(), "question bank ready");
        Ok(bank)
    }

    /// Select questions for a new session using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the bank holds no questions.
    pub fn start_session(&self, bank: &QuestionBank) -> Result<QuizSession, SessionError> {
        self.start_session_with_rng(bank, &mut rand::rng())
    }

    /// Select questions for a new session with the given random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the bank holds no questions.
    pub fn start_session_with_rng<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<QuizSession, SessionError> {
        let questions = self.selector.select(bank, rng)?;
        QuizSession::new(questions, self.clock)
    }

    /// Write the completed session's results to the configured report path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::NotCompleted` before completion and
    /// `ExportError::Writer` if the file cannot be written.
    pub fn export_report(&self, session: &QuizSession) -> Result<PathBuf, ExportError> {
        let report = session.report().ok_or(ExportError::NotCompleted)?;
        self.reports.write_report(&report.rows, &self.report_path)?;
        info!(
            path = %self.report_path.display(),
            format = %self.reports.format(),
            rows = report.rows.len(),
            "report exported"
        );
        Ok(self.report_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::time::fixed_clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use storage::report::{InMemoryReportWriter, ReportFormat};
    use storage::repository::{InMemorySource, SourceError};

    fn table(rows: usize) -> String {
        (0..rows)
            .map(|i| format!("Q{i},a{i},b{i},c{i},d{i},b{i}\n"))
            .collect()
    }

    fn service(text: &str) -> (QuizLoopService, InMemoryReportWriter) {
        let writer = InMemoryReportWriter::new();
        let svc = QuizLoopService::new(
            fixed_clock(),
            Arc::new(InMemorySource::new(text)),
            Arc::new(writer.clone()),
        );
        (svc, writer)
    }

    struct FailingSource;

    #[async_trait]
    impl QuestionSource for FailingSource {
        async fn fetch(&self) -> Result<String, SourceError> {
            Err(SourceError::Connection("unreachable".into()))
        }

        fn describe(&self) -> String {
            "failing".into()
        }
    }

    #[tokio::test]
    async fn load_bank_parses_all_rows() {
        let (svc, _) = service(&table(12));
        let bank = svc.load_bank().await.unwrap();
        assert_eq!(bank.len(), 12);
    }

    #[tokio::test]
    async fn empty_source_is_an_empty_bank() {
        let (svc, _) = service("\n");
        let err = svc.load_bank().await.unwrap_err();
        assert!(matches!(err, LoadError::EmptyBank), "unexpected: {err:?}");
    }

    #[tokio::test]
    async fn unreachable_source_is_a_load_error() {
        let svc = QuizLoopService::new(
            fixed_clock(),
            Arc::new(FailingSource),
            Arc::new(InMemoryReportWriter::new()),
        );
        let err = svc.load_bank().await.unwrap_err();
        assert!(matches!(err, LoadError::Source(_)), "unexpected: {err:?}");
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let (svc, _) = service(&table(12));
        let bank = svc.load_bank().await.unwrap();

        let mut first = svc.start_session(&bank).unwrap();
        let second = svc.start_session(&bank).unwrap();
        first.start().unwrap();
        first.submit(Some("anything")).unwrap();

        assert_eq!(first.answers().answered(), 1);
        assert_eq!(second.answers().answered(), 0);
        assert_eq!(second.total_questions(), 10);
    }

    #[tokio::test]
    async fn custom_session_size_is_respected() {
        let (svc, _) = service(&table(12));
        let svc = svc.with_session_size(3).unwrap();
        let bank = svc.load_bank().await.unwrap();

        let session = svc
            .start_session_with_rng(&bank, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(session.total_questions(), 3);
        assert_eq!(svc.session_size(), 3);
    }

    #[tokio::test]
    async fn export_requires_completion() {
        let (svc, writer) = service(&table(1));
        let bank = svc.load_bank().await.unwrap();
        let mut session = svc.start_session(&bank).unwrap();
        session.start().unwrap();

        let err = svc.export_report(&session).unwrap_err();
        assert!(matches!(err, ExportError::NotCompleted));

        session.submit(Some("b0")).unwrap();
        session.advance().unwrap();
        let path = svc.export_report(&session).unwrap();

        assert_eq!(path, PathBuf::from(ReportFormat::Xlsx.default_file_name()));
        let written = writer.written().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].rows[0].is_correct);
    }
}
