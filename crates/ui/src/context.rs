use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizLoopService;

use crate::vm::QuizVm;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session in progress, shared between the start and quiz pages.
#[derive(Clone, Copy)]
pub struct ActiveQuiz(pub Signal<Option<QuizVm>>);

impl ActiveQuiz {
    #[must_use]
    pub fn signal(self) -> Signal<Option<QuizVm>> {
        self.0
    }
}
