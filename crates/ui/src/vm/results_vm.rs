use chrono::{DateTime, Utc};

use quiz_core::model::{ResultRow, ScoreReport};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub prompt: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub result_label: &'static str,
    pub is_correct: bool,
}

impl From<&ResultRow> for ResultRowVm {
    fn from(row: &ResultRow) -> Self {
        Self {
            prompt: row.prompt.clone(),
            your_answer: row.answer_label().to_owned(),
            correct_answer: row.correct_answer.clone(),
            result_label: row.result_label(),
            is_correct: row.is_correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub correct_label: String,
    pub completed_at_str: Option<String>,
    pub rows: Vec<ResultRowVm>,
}

#[must_use]
pub fn map_results(report: &ScoreReport, completed_at: Option<DateTime<Utc>>) -> ResultsVm {
    ResultsVm {
        score_label: format!("Your score: {} / 100", report.score),
        correct_label: format!("{} of {} correct", report.correct_count, report.total),
        completed_at_str: completed_at.map(format_datetime),
        rows: report.rows.iter().map(ResultRowVm::from).collect(),
    }
}
