use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question index {index} is out of range for {len} questions")]
    OutOfRange { index: usize, len: usize },

    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
}

/// Answers submitted during a session, one slot per session question.
///
/// Slots start empty and are written at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserAnswers {
    slots: Vec<Option<String>>,
}

impl UserAnswers {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Build answers from explicit slots, e.g. for scoring a partial attempt.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<String>>) -> Self {
        Self { slots }
    }

    /// Record the answer for `index`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::OutOfRange` for an index past the session length and
    /// `AnswerError::AlreadyAnswered` if the slot is already filled.
    pub fn record(&mut self, index: usize, answer: impl Into<String>) -> Result<(), AnswerError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AnswerError::OutOfRange { index, len })?;
        if slot.is_some() {
            return Err(AnswerError::AlreadyAnswered { index });
        }
        *slot = Some(answer.into());
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Option::as_deref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of filled slots.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
