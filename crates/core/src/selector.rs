//! Random question selection for a session.

use rand::Rng;
use thiserror::Error;

use crate::model::{QuestionBank, QuestionRecord};

/// Number of questions asked per session.
pub const SESSION_SIZE: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectError {
    #[error("no questions available")]
    EmptyBank,

    #[error("session size must be > 0")]
    InvalidSessionSize,
}

/// Unbiased in-place Fisher–Yates shuffle.
///
/// For each index `i` from the last down to 1, swaps with a uniformly random
/// index in `[0, i]`. Written out rather than using `SliceRandom::shuffle`
/// so the swap order stays last-to-first and seeded runs are reproducible.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a question's options in place.
pub fn shuffle_options<R: Rng + ?Sized>(question: &mut QuestionRecord, rng: &mut R) {
    shuffle(question.options_mut(), rng);
}

/// Picks the questions for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSelector {
    size: usize,
}

impl Default for SessionSelector {
    fn default() -> Self {
        Self { size: SESSION_SIZE }
    }
}

impl SessionSelector {
    /// # Errors
    ///
    /// Returns `SelectError::InvalidSessionSize` when `size` is zero.
    pub fn new(size: usize) -> Result<Self, SelectError> {
        if size == 0 {
            return Err(SelectError::InvalidSessionSize);
        }
        Ok(Self { size })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shuffle the whole bank, keep the first `size` questions and shuffle each
    /// kept question's options independently.
    ///
    /// # Errors
    ///
    /// Returns `SelectError::EmptyBank` if the bank holds no questions.
    pub fn select<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<Vec<QuestionRecord>, SelectError> {
        if bank.is_empty() {
            return Err(SelectError::EmptyBank);
        }

        let mut questions = bank.questions().to_vec();
        shuffle(&mut questions, rng);
        questions.truncate(self.size);
        for question in &mut questions {
            shuffle_options(question, rng);
        }
        Ok(questions)
    }
}
