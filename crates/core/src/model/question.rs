use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("no questions available")]
    Empty,
}

//
// ─── QUESTION RECORD ───────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// `correct_answer` is expected to match one of the options exactly. That is
/// not enforced here; see [`QuestionRecord::has_matching_option`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: [String; OPTION_COUNT],
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    /// Exact string comparison against the stored correct answer.
    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Returns true when exactly one option equals the correct answer.
    #[must_use]
    pub fn has_matching_option(&self) -> bool {
        self.options
            .iter()
            .filter(|option| **option == self.correct_answer)
            .count()
            == 1
    }

    pub(crate) fn options_mut(&mut self) -> &mut [String; OPTION_COUNT] {
        &mut self.options
    }
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Every question parsed from the source, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<QuestionRecord>,
}

impl QuestionBank {
    /// Build a bank from parsed records.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no records are provided.
    pub fn from_records(questions: Vec<QuestionRecord>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for slice-like ergonomics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Records whose correct answer does not match exactly one option.
    pub fn mismatched(&self) -> impl Iterator<Item = (usize, &QuestionRecord)> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| !question.has_matching_option())
    }
}
