use quiz_core::model::QuestionRecord;

/// Where a session is in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    /// Question `index` is shown and has no answer yet.
    Presenting { index: usize },
    /// Question `index` was answered; waiting for an explicit advance.
    Feedback { index: usize, is_correct: bool },
    Completed,
}

impl QuizState {
    /// Index of the question on screen, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Presenting { index } | Self::Feedback { index, .. } => Some(index),
            Self::NotStarted | Self::Completed => None,
        }
    }
}

/// Result of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub index: usize,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Next { index: usize },
    Completed,
}

impl AdvanceOutcome {
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Read-only view of the question on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'a> {
    pub index: usize,
    pub total: usize,
    pub question: &'a QuestionRecord,
}

impl QuestionView<'_> {
    /// One-based question number for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}
