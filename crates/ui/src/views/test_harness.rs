use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuestionRecord;
use quiz_core::time::fixed_clock;
use services::{QuizLoopService, QuizSession};
use storage::repository::Storage;

use crate::context::{ActiveQuiz, UiApp, build_app_context};
use crate::views::{QuizView, StartView};
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Quiz,
}

/// A session to install before the first render, with intents already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSeed {
    pub questions: Vec<QuestionRecord>,
    pub intents: Vec<QuizIntent>,
}

fn seeded_quiz(seed: Option<&QuizSeed>) -> Option<QuizVm> {
    let seed = seed?;
    let session = QuizSession::new(seed.questions.clone(), fixed_clock()).expect("session");
    let mut vm = QuizVm::start(session).expect("start");
    for intent in &seed.intents {
        vm.dispatch(intent.clone()).expect("seed intent");
    }
    Some(vm)
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: Option<QuizSeed>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    let active = use_signal(|| seeded_quiz(props.seed.as_ref()));
    use_context_provider(|| ActiveQuiz(active));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, storage: Storage, seed: Option<QuizSeed>) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(
        fixed_clock(),
        storage.questions,
        storage.reports,
    ));
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom }
}
