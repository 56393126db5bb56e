use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use intake_core::model::{Questionnaire, Version};
use services::load_questionnaire;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidVersion { raw: String },
    InvalidQuestionsPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidVersion { raw } => write!(f, "invalid --version value: {raw}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
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
    questionnaire: Questionnaire,
    version: Version,
}

impl UiApp for DesktopApp {
    fn questionnaire(&self) -> Questionnaire {
        self.questionnaire.clone()
    }

    fn initial_version(&self) -> Version {
        self.version
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <file.json>] [--version <basic|advanced>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in questionnaire, basic version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTAKE_QUESTIONS, INTAKE_VERSION, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    version: Version,
}

impl Args {
    /// Flags win over environment values.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut questions = env("INTAKE_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut version = env("INTAKE_VERSION")
            .and_then(|value| value.parse::<Version>().ok())
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    questions = Some(PathBuf::from(value));
                }
                "--version" => {
                    let value = require_value(args, "--version")?;
                    version = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidVersion { raw: value.clone() })?;
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { questions, version }))
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing()?;

    let questionnaire = match args.questions.as_deref() {
        Some(path) => load_questionnaire(path)?,
        None => Questionnaire::builtin(),
    };
    tracing::info!(
        questions = questionnaire.len(),
        version = %args.version,
        "starting intake"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questionnaire,
        version: args.version,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Triagem")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
