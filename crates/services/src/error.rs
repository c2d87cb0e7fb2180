//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::AnswerError;
use quiz_core::selector::SelectError;
use storage::repository::SourceError;

/// Errors emitted while loading the question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("no questions available")]
    EmptyBank,
}

/// Errors emitted by the session state machine.
///
/// All of these are recoverable; the session is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("please select an option")]
    NoSelection,
    #[error("session has not been started")]
    NotStarted,
    #[error("session already started")]
    AlreadyStarted,
    #[error("current question has not been answered")]
    NotAnswered,
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Select(SelectError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::EmptyBank => Self::Empty,
            other => Self::Select(other),
        }
    }
}

/// Errors emitted while exporting the results report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("session is not completed yet")]
    NotCompleted,
    #[error(transparent)]
    Writer(#[from] storage::report::ExportError),
}
