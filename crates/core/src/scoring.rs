//! Pure scoring of a finished (or partial) attempt.

use crate::model::{QuestionRecord, ResultRow, ScoreReport, UserAnswers};

/// Percentage of `correct` out of `total`, rounded half-up.
///
/// Integer arithmetic, so `.5` boundaries always round up (1/8 → 13).
/// A zero `total` scores 0.
#[must_use]
pub fn round_percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u64;
    let total = total as u64;
    let rounded = (200 * correct + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

/// Score `answers` against `questions`.
///
/// Indices without an answer count as incorrect. Rows follow question order.
#[must_use]
pub fn score(questions: &[QuestionRecord], answers: &UserAnswers) -> ScoreReport {
    let rows: Vec<ResultRow> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let user_answer = answers.get(index).map(str::to_owned);
            let is_correct = user_answer
                .as_deref()
                .is_some_and(|answer| question.is_correct(answer));
            ResultRow {
                prompt: question.prompt().to_owned(),
                user_answer,
                correct_answer: question.correct_answer().to_owned(),
                is_correct,
            }
        })
        .collect();

    let correct_count = rows.iter().filter(|row| row.is_correct).count();
    let total = questions.len();

    ScoreReport {
        correct_count,
        total,
        score: round_percent(correct_count, total),
        rows,
    }
}
