use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::Clock;
use services::QuizLoopService;
use storage::report::ReportFormat;
use storage::repository::{SourceLocation, Storage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{APP_TITLE, App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSource { raw: String },
    InvalidFormat { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSource { raw } => write!(f, "invalid --source value: {raw}"),
            ArgsError::InvalidFormat { raw } => {
                write!(f, "invalid --format value: {raw} (expected xlsx or csv)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug)]
struct Args {
    source: SourceLocation,
    report: Option<PathBuf>,
    format: ReportFormat,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  quiz ui    [--source <path|url>] [--report <path>] [--format xlsx|csv]");
    eprintln!("  quiz check [--source <path|url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --source qa.csv");
    eprintln!("  --report test_results.xlsx (test_results.csv with --format csv)");
    eprintln!("  --format xlsx");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_SOURCE, QUIZ_REPORT, QUIZ_REPORT_FORMAT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        command: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut source = std::env::var("QUIZ_SOURCE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(SourceLocation::default, |value| SourceLocation::parse(&value));
        let mut report = std::env::var("QUIZ_REPORT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut format = std::env::var("QUIZ_REPORT_FORMAT")
            .ok()
            .and_then(|value| value.parse::<ReportFormat>().ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => {
                    let value = require_value(args, "--source")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidSource { raw: value });
                    }
                    source = SourceLocation::parse(&value);
                }
                "--report" if command == Command::Ui => {
                    report = Some(PathBuf::from(require_value(args, "--report")?));
                }
                "--format" if command == Command::Ui => {
                    let value = require_value(args, "--format")?;
                    format = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidFormat { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            source,
            report,
            format,
        })
    }

    fn report_path(&self) -> PathBuf {
        self.report
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::open(&parsed.source, parsed.format);
    let quiz_loop = QuizLoopService::new(Clock::default_clock(), storage.questions, storage.reports)
        .with_report_path(parsed.report_path());

    match cmd {
        Command::Ui => {
            info!(
                source = %parsed.source,
                report = %quiz_loop.report_path().display(),
                format = %parsed.format,
                "launching desktop ui"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                quiz_loop: Arc::new(quiz_loop),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let bank = quiz_loop.load_bank().await?;
            let mismatched = bank.mismatched().count();
            println!(
                "{}: {} questions, {} with an answer that matches no single option",
                parsed.source,
                bank.len(),
                mismatched
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
