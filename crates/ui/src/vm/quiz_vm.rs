use services::{AdvanceOutcome, QuizSession, QuizState, SessionError};

use crate::views::ViewError;
use crate::vm::results_vm::{ResultsVm, map_results};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Advance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Question,
    Feedback { is_correct: bool },
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
}

/// Inline, recoverable notices shown under the question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizNotice {
    SelectOption,
}

impl QuizNotice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SelectOption => "Please select an option.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub heading: String,
    pub progress_label: String,
    pub options: Vec<OptionVm>,
}

/// Everything the quiz page renders, detached from the session borrow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub phase: QuizPhase,
    pub card: Option<QuestionCardVm>,
    pub notice: Option<QuizNotice>,
    pub can_submit: bool,
    pub results: Option<ResultsVm>,
}

pub struct QuizVm {
    session: QuizSession,
    selected: Option<String>,
    notice: Option<QuizNotice>,
}

impl QuizVm {
    /// Start `session` and wrap it for the quiz page.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::EmptyBank` for a session without questions and
    /// `ViewError::Unknown` if it was already started.
    pub fn start(mut session: QuizSession) -> Result<Self, ViewError> {
        session.start().map_err(ViewError::from)?;
        Ok(Self {
            session,
            selected: None,
            notice: None,
        })
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<QuizNotice> {
        self.notice
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self.session.state() {
            QuizState::Feedback { is_correct, .. } => QuizPhase::Feedback { is_correct },
            QuizState::Completed => QuizPhase::Completed,
            QuizState::NotStarted | QuizState::Presenting { .. } => QuizPhase::Question,
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for actions the session rejects, other than
    /// a missing selection, which becomes a notice instead.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(value) => {
                if self.phase() == QuizPhase::Question {
                    self.selected = Some(value);
                    self.notice = None;
                }
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Submit => match self.session.submit(self.selected.as_deref()) {
                Ok(_) => {
                    self.notice = None;
                    Ok(QuizOutcome::Continue)
                }
                Err(SessionError::NoSelection) => {
                    self.notice = Some(QuizNotice::SelectOption);
                    Ok(QuizOutcome::Continue)
                }
                Err(err) => Err(ViewError::from(err)),
            },
            QuizIntent::Advance => {
                let outcome = self.session.advance().map_err(ViewError::from)?;
                self.selected = None;
                self.notice = None;
                Ok(match outcome {
                    AdvanceOutcome::Next { .. } => QuizOutcome::Continue,
                    AdvanceOutcome::Completed => QuizOutcome::Completed,
                })
            }
        }
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let view = self.session.current()?;
        let question = view.question;
        let options = question
            .options()
            .iter()
            .map(|value| OptionVm {
                value: value.clone(),
                checked: self.selected.as_deref() == Some(value.as_str()),
            })
            .collect();

        Some(QuestionCardVm {
            heading: format!("{}. {}", view.number(), question.prompt()),
            progress_label: format!("Question {} of {}", view.number(), view.total),
            options,
        })
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let phase = self.phase();
        QuizScreenVm {
            phase,
            card: self.question_card(),
            notice: self.notice,
            can_submit: phase == QuizPhase::Question && self.selected.is_some(),
            results: self
                .session
                .report()
                .map(|report| map_results(report, self.session.completed_at())),
        }
    }
}
