use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{OpenTdbClient, ProviderConfig, TriviaProvider};
use trivia_core::{CategoryId, Difficulty, SelectionParameters};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCategory { raw: String },
    InvalidDifficulty { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCategory { raw } => write!(f, "invalid --category value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw} (easy, medium, hard)")
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
    provider: Arc<OpenTdbClient>,
    shuffle_answers: bool,
    selection: SelectionParameters,
}

impl UiApp for DesktopApp {
    fn provider(&self) -> Arc<dyn TriviaProvider> {
        self.provider.clone()
    }

    fn shuffle_answers(&self) -> bool {
        self.shuffle_answers
    }

    fn initial_selection(&self) -> SelectionParameters {
        self.selection.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--category <id>] [--amount <n>]");
    eprintln!("                      [--difficulty <easy|medium|hard>] [--shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url https://opentdb.com");
    eprintln!("  --amount 10 --difficulty medium, no category (pick one in the form)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_API_URL, TRIVIA_SHUFFLE_ANSWERS, RUST_LOG");
}

struct Args {
    api_url: Option<String>,
    shuffle_answers: bool,
    selection: SelectionParameters,
}

impl Args {
    /// `shuffle_default` comes from the environment; `--shuffle` turns it on.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        shuffle_default: bool,
    ) -> Result<Self, ArgsError> {
        let mut api_url = None;
        let mut shuffle_answers = shuffle_default;
        let mut selection = SelectionParameters::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    api_url = Some(require_value(args, "--api-url")?);
                }
                "--category" => {
                    let value = require_value(args, "--category")?;
                    let parsed: CategoryId = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCategory { raw: value.clone() })?;
                    selection.set_category(Some(parsed));
                }
                "--amount" => {
                    // Passed through unvalidated, same as the form field.
                    selection.set_question_count(require_value(args, "--amount")?);
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    let parsed: Difficulty = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value.clone() })?;
                    selection.set_difficulty(parsed);
                }
                "--shuffle" => shuffle_answers = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            shuffle_answers,
            selection,
        })
    }
}

fn shuffle_from_env() -> bool {
    std::env::var("TRIVIA_SHUFFLE_ANSWERS")
        .ok()
        .is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,services=debug,ui=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, shuffle_from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let config = match parsed.api_url.as_deref() {
        Some(url) => ProviderConfig::new(url)?,
        None => ProviderConfig::from_env()?,
    };
    info!(base_url = %config.base_url(), shuffle = parsed.shuffle_answers, "starting quiz app");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        provider: Arc::new(OpenTdbClient::new(config)),
        shuffle_answers: parsed.shuffle_answers,
        selection: parsed.selection,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz App")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_with_shuffle(args, false)
    }

    fn parse_with_shuffle(args: &[&str], shuffle_default: bool) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, shuffle_default)
    }

    #[test]
    fn preselection_flags_are_applied() {
        let args = parse(&[
            "--category",
            "18",
            "--amount",
            "5",
            "--difficulty",
            "Hard",
            "--api-url",
            "http://localhost:9000",
            "--shuffle",
        ])
        .unwrap();

        assert_eq!(args.selection.category_id(), Some(CategoryId::new(18)));
        assert_eq!(args.selection.question_count().raw(), "5");
        assert_eq!(args.selection.difficulty(), Difficulty::Hard);
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:9000"));
        assert!(args.shuffle_answers);
    }

    #[test]
    fn shuffle_default_is_passed_in() {
        assert!(!parse(&[]).unwrap().shuffle_answers);
        assert!(parse_with_shuffle(&[], true).unwrap().shuffle_answers);
        assert!(parse_with_shuffle(&["--shuffle"], false).unwrap().shuffle_answers);
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(matches!(
            parse(&["--category", "science"]),
            Err(ArgsError::InvalidCategory { .. })
        ));
        assert!(matches!(
            parse(&["--difficulty", "insane"]),
            Err(ArgsError::InvalidDifficulty { .. })
        ));
        assert!(matches!(
            parse(&["--amount"]),
            Err(ArgsError::MissingValue { flag: "--amount" })
        ));
        assert!(matches!(parse(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
    }
}
