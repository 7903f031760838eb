use std::fmt;
use std::path::PathBuf;

use services::chat::ChatConfig;
use services::{AppServices, Clock};

mod console;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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

struct Args {
    out_dir: PathBuf,
    model: Option<String>,
    base_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--out-dir <dir>] [--model <id>] [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --out-dir .");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTERVIEW_AI_API_KEY, INTERVIEW_AI_BASE_URL, INTERVIEW_AI_MODEL,");
    eprintln!("  INTERVIEW_OUT_DIR (also read from .env)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut out_dir = std::env::var("INTERVIEW_OUT_DIR")
            .map_or_else(|_| PathBuf::from("."), PathBuf::from);
        let mut model = None;
        let mut base_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out-dir" => {
                    out_dir = PathBuf::from(require_value(args, "--out-dir")?);
                }
                "--model" => {
                    model = Some(require_value(args, "--model")?);
                }
                "--base-url" => {
                    base_url = Some(require_value(args, "--base-url")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            out_dir,
            model,
            base_url,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Secrets come from the process environment; .env is a convenience.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Flags override the environment. A missing API key is not validated
    // here; the first remote call reports it instead.
    let config = ChatConfig::from_env().map(|mut config| {
        if let Some(model) = parsed.model {
            config.model = model;
        }
        if let Some(base_url) = parsed.base_url {
            config.base_url = base_url;
        }
        config
    });

    let services = AppServices::new(Clock::default_clock(), config, parsed.out_dir);
    console::run(&services).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
