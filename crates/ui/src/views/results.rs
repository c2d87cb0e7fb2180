use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::{ResultRowVm, ResultsVm};

/// Abbreviation study notes offered next to the export button.
pub const STUDY_GUIDE_URL: &str =
    "https://mango-vermicelli-0e5.notion.site/15cdf2466f71806fbf32fd7b2a328aa0";

#[component]
pub fn ResultsPanel(
    results: ResultsVm,
    on_export: EventHandler<()>,
    export_message: Option<String>,
    export_error: Option<ViewError>,
) -> Element {
    let ResultsVm {
        score_label,
        correct_label,
        completed_at_str,
        rows,
    } = results;

    rsx! {
        section { class: "results",
            h2 { class: "results-score", "{score_label}" }
            p { class: "results-summary", "{correct_label}" }
            if let Some(completed_at) = completed_at_str {
                p { class: "results-time", "Completed at {completed_at}" }
            }
            table { class: "table results-table",
                thead {
                    tr {
                        th { "Question" }
                        th { "Your answer" }
                        th { "Correct answer" }
                        th { "Result" }
                    }
                }
                tbody {
                    for row in rows {
                        ResultRow { row }
                    }
                }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-success",
                    id: "export-results",
                    r#type: "button",
                    onclick: move |_| on_export.call(()),
                    "Download results"
                }
                // The desktop webview hands external links to the system browser.
                a {
                    class: "btn btn-info",
                    id: "study-guide",
                    href: STUDY_GUIDE_URL,
                    target: "_blank",
                    rel: "noopener",
                    "Abbreviation study guide"
                }
            }
            if let Some(message) = export_message {
                p { class: "notice notice-success", "{message}" }
            }
            if let Some(err) = export_error {
                p { class: "notice notice-error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn ResultRow(row: ResultRowVm) -> Element {
    let class = if row.is_correct {
        "result-correct"
    } else {
        "result-incorrect"
    };
    rsx! {
        tr {
            td { "{row.prompt}" }
            td { "{row.your_answer}" }
            td { "{row.correct_answer}" }
            td { class: "{class}", "{row.result_label}" }
        }
    }
}
