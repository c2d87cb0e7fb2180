mod answers;
mod question;
mod result;

pub use answers::{AnswerError, UserAnswers};
pub use question::{BankError, OPTION_COUNT, QuestionBank, QuestionRecord};
pub use result::{ResultRow, ScoreReport, UNANSWERED};
