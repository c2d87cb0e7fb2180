use std::sync::Arc;

use quiz_core::model::{OPTION_COUNT, QuestionRecord};
use storage::report::InMemoryReportWriter;
use storage::repository::{QuestionSource, SourceError, Storage};

use super::results::STUDY_GUIDE_URL;
use super::test_harness::{QuizSeed, ViewKind, setup_view_harness};
use crate::vm::QuizIntent;

const BANK: &str = "\
What does APT stand for?,Advanced Persistent Threat,Application Program Tool,Automated Patch Tracking,Access Policy Table,Advanced Persistent Threat
What does BYOD stand for?,Bring Your Own Device,Build Your Own Data,Backup Your Own Disk,Block Your Open Domain,Bring Your Own Device
What does SOC stand for?,Security Operation Center,System On Chip,Service Order Code,Secure Online Channel,Security Operation Center
";

fn question(prompt: &str, correct: &str) -> QuestionRecord {
    let options: [String; OPTION_COUNT] = [
        correct.to_owned(),
        "Distractor One".to_owned(),
        "Distractor Two".to_owned(),
        "Distractor Three".to_owned(),
    ];
    QuestionRecord::new(prompt, options, correct)
}

fn questions() -> Vec<QuestionRecord> {
    vec![
        question("What does APT stand for?", "Advanced Persistent Threat"),
        question("What does BYOD stand for?", "Bring Your Own Device"),
        question("What does SOC stand for?", "Security Operation Center"),
    ]
}

fn seed(intents: Vec<QuizIntent>) -> Option<QuizSeed> {
    Some(QuizSeed {
        questions: questions(),
        intents,
    })
}

fn answer(value: &str) -> [QuizIntent; 2] {
    [QuizIntent::Select(value.to_owned()), QuizIntent::Submit]
}

struct FailingSource;

#[async_trait::async_trait]
impl QuestionSource for FailingSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        Err(SourceError::Connection("fail".to_string()))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

fn memory(text: &str) -> Storage {
    Storage::in_memory(text, InMemoryReportWriter::new())
}

fn failing() -> Storage {
    Storage {
        questions: Arc::new(FailingSource),
        reports: Arc::new(InMemoryReportWriter::new()),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_renders_loaded_count() {
    let mut harness = setup_view_harness(ViewKind::Start, memory(BANK), None);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("3 questions loaded"), "missing count in {html}");
    assert!(html.contains("Start the test"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_reports_source_failure() {
    let mut harness = setup_view_harness(ViewKind::Start, failing(), None);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load the question file."),
        "missing error in {html}"
    );
    assert!(!html.contains("Start the test"), "unexpected start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_reports_empty_bank() {
    let mut harness = setup_view_harness(ViewKind::Start, memory("\n\n"), None);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No questions available."), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_without_session_links_back() {
    let mut harness = setup_view_harness(ViewKind::Quiz, memory(BANK), None);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("No test in progress."), "missing message in {html}");
    assert!(html.contains("Back to start"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, memory(BANK), seed(Vec::new()));
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("1. What does APT stand for?"),
        "missing heading in {html}"
    );
    assert!(html.contains("Question 1 of 3"), "missing progress in {html}");
    assert!(html.contains("Distractor Two"), "missing option in {html}");
    assert!(html.contains("Submit answer"), "missing submit in {html}");
    assert!(!html.contains("Correct!"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_prompts_for_selection() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        memory(BANK),
        seed(vec![QuizIntent::Submit]),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Please select an option."),
        "missing notice in {html}"
    );
    assert!(html.contains("1. What does APT stand for?"), "moved on in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        memory(BANK),
        seed(answer("Advanced Persistent Threat").to_vec()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing feedback in {html}");
    assert!(html.contains("Next question"), "missing next in {html}");

    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        memory(BANK),
        seed(answer("Distractor One").to_vec()),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Incorrect."), "missing feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_results_table() {
    let mut intents = Vec::new();
    intents.extend(answer("Advanced Persistent Threat"));
    intents.push(QuizIntent::Advance);
    intents.extend(answer("Distractor One"));
    intents.push(QuizIntent::Advance);
    intents.extend(answer("Security Operation Center"));
    intents.push(QuizIntent::Advance);

    let reports = InMemoryReportWriter::new();
    let storage = Storage::in_memory(BANK, reports.clone());
    let mut harness = setup_view_harness(ViewKind::Quiz, storage, seed(intents));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Your score: 67 / 100"), "missing score in {html}");
    assert!(html.contains("2 of 3 correct"), "missing summary in {html}");
    assert!(html.contains("Your answer"), "missing header in {html}");
    assert!(html.contains("Distractor One"), "missing row in {html}");
    assert!(html.contains("Incorrect"), "missing result in {html}");
    assert!(html.contains("Download results"), "missing export in {html}");
    assert!(
        html.contains(STUDY_GUIDE_URL),
        "missing study guide link in {html}"
    );
    assert!(reports.written().unwrap().is_empty());
}
