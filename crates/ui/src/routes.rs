use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::app::APP_TITLE;
use crate::views::{QuizView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                div { class: "card",
                    h1 { class: "card-title", "{APP_TITLE}" }
                    Outlet::<Route> {}
                }
            }
        }
    }
}
