use dioxus::prelude::*;

use services::{LoadError, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SourceLoad,
    EmptyBank,
    Export,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SourceLoad => "Failed to load the question file.",
            Self::EmptyBank => "No questions available.",
            Self::Export => "Could not save the results file.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<LoadError> for ViewError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::EmptyBank => Self::EmptyBank,
            _ => Self::SourceLoad,
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Empty => Self::EmptyBank,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
