use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

use quiz_core::Clock;
use quiz_core::model::{QuestionRecord, ScoreReport, UserAnswers};
use quiz_core::scoring;

use super::progress::QuizProgress;
use super::state::{AdvanceOutcome, QuestionView, QuizState, SubmitOutcome};
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at a fixed list of questions.
///
/// Owns its questions, answers and cursor; nothing is shared between sessions.
/// Transitions only happen through [`start`](Self::start),
/// [`submit`](Self::submit) and [`advance`](Self::advance), and a rejected
/// action leaves the session untouched.
pub struct QuizSession {
    clock: Clock,
    questions: Vec<QuestionRecord>,
    answers: UserAnswers,
    state: QuizState,
    report: Option<ScoreReport>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over already selected questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<QuestionRecord>, clock: Clock) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let answers = UserAnswers::new(questions.len());
        Ok(Self {
            clock,
            questions,
            answers,
            state: QuizState::NotStarted,
            report: None,
            started_at: None,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &UserAnswers {
        &self.answers
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == QuizState::Completed
    }

    /// Scored results; present once the session is completed.
    #[must_use]
    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self.answers.answered();
        QuizProgress {
            total: self.total_questions(),
            answered,
            remaining: self.total_questions().saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    /// The question on screen while presenting or showing feedback.
    #[must_use]
    pub fn current(&self) -> Option<QuestionView<'_>> {
        let index = self.state.index()?;
        self.questions.get(index).map(|question| QuestionView {
            index,
            total: self.questions.len(),
            question,
        })
    }

    /// Show the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` unless the session is fresh.
    pub fn start(&mut self) -> Result<QuestionView<'_>, SessionError> {
        if self.state != QuizState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.started_at = Some(self.clock.now());
        self.state = QuizState::Presenting { index: 0 };
        debug!(total = self.questions.len(), "quiz started");
        self.current().ok_or(SessionError::Empty)
    }

    /// Submit the selected option for the question on screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when `selection` is `None`,
    /// `SessionError::AlreadyAnswered` while feedback is showing, and
    /// `SessionError::NotStarted` / `SessionError::Completed` outside the loop.
    pub fn submit(&mut self, selection: Option<&str>) -> Result<SubmitOutcome, SessionError> {
        let index = match self.state {
            QuizState::Presenting { index } => index,
            QuizState::Feedback { index, .. } => {
                return Err(SessionError::AlreadyAnswered { index });
            }
            QuizState::NotStarted => return Err(SessionError::NotStarted),
            QuizState::Completed => return Err(SessionError::Completed),
        };
        let Some(answer) = selection else {
            return Err(SessionError::NoSelection);
        };
        let question = self.questions.get(index).ok_or(SessionError::Completed)?;
        let is_correct = question.is_correct(answer);

        self.answers.record(index, answer)?;
        self.state = QuizState::Feedback { index, is_correct };
        debug!(index, is_correct, "answer recorded");

        Ok(SubmitOutcome { index, is_correct })
    }

    /// Leave feedback for the next question, or complete after the last one.
    ///
    /// Completing scores the session; the report is available from then on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` while a question is still open,
    /// `SessionError::NotStarted` before start and `SessionError::Completed`
    /// after completion.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        let index = match self.state {
            QuizState::Feedback { index, .. } => index,
            QuizState::Presenting { .. } => return Err(SessionError::NotAnswered),
            QuizState::NotStarted => return Err(SessionError::NotStarted),
            QuizState::Completed => return Err(SessionError::Completed),
        };

        let next = index + 1;
        if next < self.questions.len() {
            self.state = QuizState::Presenting { index: next };
            debug!(index = next, "advanced to next question");
            return Ok(AdvanceOutcome::Next { index: next });
        }

        let report = scoring::score(&self.questions, &self.answers);
        debug!(
            correct = report.correct_count,
            total = report.total,
            score = report.score,
            "quiz completed"
        );
        self.report = Some(report);
        self.completed_at = Some(self.clock.now());
        self.state = QuizState::Completed;
        Ok(AdvanceOutcome::Completed)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.answered())
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
