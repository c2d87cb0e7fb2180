mod progress;
mod service;
mod state;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::QuizSession;
pub use state::{AdvanceOutcome, QuestionView, QuizState, SubmitOutcome};
pub use workflow::QuizLoopService;
