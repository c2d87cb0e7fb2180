pub mod app;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::{APP_TITLE, App};
pub use context::{ActiveQuiz, AppContext, UiApp, build_app_context};
