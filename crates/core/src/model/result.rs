use serde::{Deserialize, Serialize};

/// Marker shown in place of an answer for questions left unanswered.
pub const UNANSWERED: &str = "Unanswered";

/// Outcome of one session question, in session order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub prompt: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

impl ResultRow {
    /// The submitted answer, or [`UNANSWERED`].
    #[must_use]
    pub fn answer_label(&self) -> &str {
        self.user_answer.as_deref().unwrap_or(UNANSWERED)
    }

    #[must_use]
    pub fn result_label(&self) -> &'static str {
        if self.is_correct { "Correct" } else { "Incorrect" }
    }
}

/// Aggregate result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    /// Percentage in `0..=100`, rounded half-up.
    pub score: u32,
    pub rows: Vec<ResultRow>,
}
