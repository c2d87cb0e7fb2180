//! Mapping between the comma-separated question table and `QuestionRecord`s.
//!
//! Layout: no header row, six columns per record:
//! `prompt, option1, option2, option3, option4, correct_answer`.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use quiz_core::model::{OPTION_COUNT, QuestionRecord};

use crate::repository::{QuestionSource, SourceError};

/// Columns per record: prompt, four options, correct answer.
pub const COLUMN_COUNT: usize = OPTION_COUNT + 2;

/// Parse the raw table into question records.
///
/// Blank records are skipped.
///
/// # Errors
///
/// Returns `SourceError::Malformed` for a record with the wrong column count and
/// `SourceError::Csv` for unreadable input.
pub fn parse_records(text: &str) -> Result<Vec<QuestionRecord>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut questions = Vec::new();
    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        questions.push(map_record(&record)?);
    }
    Ok(questions)
}

/// Fetch and parse every record from `source`.
///
/// # Errors
///
/// Returns `SourceError` for fetch or parse failures.
pub async fn load_records(source: &dyn QuestionSource) -> Result<Vec<QuestionRecord>, SourceError> {
    let location = source.describe();
    debug!(%location, "fetching question source");
    let text = source.fetch().await?;
    let questions = parse_records(&text)?;
    info!(%location, count = questions.len(), "parsed question source");
    Ok(questions)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn map_record(record: &StringRecord) -> Result<QuestionRecord, SourceError> {
    if record.len() != COLUMN_COUNT {
        let line = record.position().map_or(0, csv::Position::line);
        return Err(SourceError::Malformed {
            line,
            found: record.len(),
        });
    }

    let options: [String; OPTION_COUNT] = std::array::from_fn(|slot| record[slot + 1].to_owned());
    Ok(QuestionRecord::new(
        &record[0],
        options,
        &record[COLUMN_COUNT - 1],
    ))
}
