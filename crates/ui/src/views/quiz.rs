use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::{ActiveQuiz, AppContext};
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::results::ResultsPanel;
use crate::vm::{QuestionCardVm, QuizIntent, QuizNotice, QuizPhase, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveQuiz>().signal();
    let navigator = use_navigator();
    let error = use_signal(|| None::<ViewError>);
    let export_state = use_signal(|| None::<Result<String, ViewError>>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut active = active;
        let mut error = error;
        let result = match active.write().as_mut() {
            Some(vm) => vm.dispatch(intent),
            None => Err(ViewError::Unknown),
        };
        match result {
            Ok(_) => error.set(None),
            Err(err) => error.set(Some(err)),
        }
    });

    let on_export = {
        let quiz_loop = ctx.quiz_loop();
        use_callback(move |()| {
            let mut export_state = export_state;
            let outcome = match active.read().as_ref() {
                Some(vm) => quiz_loop
                    .export_report(vm.session())
                    .map(|path| path.display().to_string())
                    .map_err(|_| ViewError::Export),
                None => Err(ViewError::Unknown),
            };
            export_state.set(Some(outcome));
        })
    };

    let screen = active.read().as_ref().map(QuizVm::screen);
    let Some(screen) = screen else {
        return rsx! {
            div { class: "page",
                p { "No test in progress." }
                button {
                    class: "btn btn-secondary",
                    id: "back-to-start",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Start {});
                    },
                    "Back to start"
                }
            }
        };
    };

    let (export_message, export_error) = match export_state() {
        Some(Ok(path)) => (Some(format!("Results saved to {path}")), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    rsx! {
        div { class: "page quiz-page",
            if let Some(err) = error() {
                p { class: "notice notice-error", "{err.message()}" }
            }
            match (screen.phase, screen.results, screen.card) {
                (QuizPhase::Completed, Some(results), _) => rsx! {
                    ResultsPanel { results, on_export, export_message, export_error }
                },
                (phase, _, Some(card)) => rsx! {
                    QuestionPanel {
                        card,
                        phase,
                        notice: screen.notice,
                        can_submit: screen.can_submit,
                        on_intent: dispatch_intent,
                    }
                },
                _ => rsx! {
                    p { "{ViewError::Unknown.message()}" }
                },
            }
        }
    }
}

#[component]
fn QuestionPanel(
    card: QuestionCardVm,
    phase: QuizPhase,
    notice: Option<QuizNotice>,
    can_submit: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let answered = phase != QuizPhase::Question;
    let options = card.options.into_iter().map(move |option| {
        let value = option.value.clone();
        rsx! {
            label { class: "form-check-label option",
                input {
                    class: "form-check-input",
                    r#type: "radio",
                    name: "answer",
                    value: "{option.value}",
                    checked: option.checked,
                    disabled: answered,
                    onchange: move |_| on_intent.call(QuizIntent::Select(value.clone())),
                }
                span { class: "option-text", "{option.value}" }
            }
        }
    });

    rsx! {
        section { class: "question",
            p { class: "question-progress", "{card.progress_label}" }
            h2 { class: "question-title", "{card.heading}" }
            form { class: "question-options",
                onsubmit: move |evt| evt.prevent_default(),
                {options}
            }
            if let Some(notice) = notice {
                p { class: "notice notice-warning", "{notice.message()}" }
            }
            match phase {
                QuizPhase::Feedback { is_correct: true } => rsx! {
                    div { class: "feedback correct-answer", "Correct!" }
                },
                QuizPhase::Feedback { is_correct: false } => rsx! {
                    div { class: "feedback incorrect-answer", "Incorrect." }
                },
                QuizPhase::Question | QuizPhase::Completed => rsx! {},
            }
            div { class: "question-actions",
                if answered {
                    button {
                        class: "btn btn-primary",
                        id: "next-question",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Advance),
                        "Next question"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "submit-answer",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "Submit answer"
                    }
                }
            }
        }
    }
}
