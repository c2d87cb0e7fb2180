#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::{ExportError, LoadError, SessionError};
pub use quiz::{
    AdvanceOutcome, QuestionView, QuizLoopService, QuizProgress, QuizSession, QuizState,
    SubmitOutcome,
};
