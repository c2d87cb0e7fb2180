use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QuestionBank;

use crate::context::{ActiveQuiz, AppContext};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::QuizVm;

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        async move { quiz_loop.load_bank().await.map_err(ViewError::from) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page start-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading questions..." }
                },
                ViewState::Ready(bank) => rsx! {
                    StartPanel { bank }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice notice-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        id: "retry-load",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Try again"
                    }
                },
            }
        }
    }
}

#[component]
fn StartPanel(bank: QuestionBank) -> Element {
    let ctx = use_context::<AppContext>();
    let mut active = use_context::<ActiveQuiz>().signal();
    let navigator = use_navigator();
    let mut error = use_signal(|| None::<ViewError>);
    let quiz_loop = ctx.quiz_loop();
    let count = bank.len();
    let session_size = quiz_loop.session_size().min(count);

    let on_start = move |_: MouseEvent| {
        let started = quiz_loop
            .start_session(&bank)
            .map_err(ViewError::from)
            .and_then(QuizVm::start);
        match started {
            Ok(vm) => {
                active.set(Some(vm));
                error.set(None);
                navigator.push(Route::Quiz {});
            }
            Err(err) => error.set(Some(err)),
        }
    };

    rsx! {
        p { class: "start-summary", "{count} questions loaded. Each test asks {session_size} of them." }
        if let Some(err) = error() {
            p { class: "notice notice-error", "{err.message()}" }
        }
        button {
            class: "btn btn-primary btn-lg",
            id: "start-test",
            r#type: "button",
            onclick: on_start,
            "Start the test"
        }
    }
}
