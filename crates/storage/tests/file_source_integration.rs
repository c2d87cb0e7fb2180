use std::io::Write;
use std::path::PathBuf;

use storage::repository::{SourceError, SourceLocation, Storage};
use storage::report::ReportFormat;
use storage::rows::load_records;
use storage::{FileSource, QuestionSource};

fn write_bank(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file
}

#[tokio::test]
async fn file_source_round_trips_question_table() {
    let file = write_bank(&[
        "What does XSS stand for?,Cross-Site Scripting,Extra Secure Socket,XML Signature Scheme,Cross Server Sync,Cross-Site Scripting",
        "What does CSRF stand for?,Cross-Site Request Forgery,Client Side Rate Filter,Certificate Signing Request Form,Central Security Response Force,Cross-Site Request Forgery",
    ]);

    let source = FileSource::new(file.path());
    assert_eq!(source.path(), file.path());
    let questions = load_records(&source).await.expect("load");

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1].prompt(), "What does CSRF stand for?");
    assert_eq!(source.describe(), file.path().display().to_string());
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let source = FileSource::new(PathBuf::from("definitely/not/here/qa.csv"));
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }), "unexpected: {err:?}");
}

#[tokio::test]
async fn storage_open_wires_file_source_and_format() {
    let file = write_bank(&["Q,a,b,c,d,a"]);
    let location = SourceLocation::File(file.path().to_path_buf());

    let storage = Storage::open(&location, ReportFormat::Csv);

    let questions = load_records(storage.questions.as_ref()).await.expect("load");
    assert_eq!(questions.len(), 1);
    assert_eq!(storage.reports.format(), ReportFormat::Csv);
}
