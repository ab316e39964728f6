use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use divtool::division::io::result_file::RESULT_FILE;
use divtool::messages::Locale;
use divtool::{DivisionTool, Result, ToolError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging() {
        eprintln!("warning: {error}");
    }

    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let tool = DivisionTool::new()
        .with_output_path(cli.output)
        .with_locale(cli.lang.into())
        .with_pause(cli.pause);

    let stdin = io::stdin();
    let stdout = io::stdout();
    tool.run(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Divide two integers read from standard input and save the quotient."
)]
struct Cli {
    /// File the quotient is written to.
    #[arg(long, default_value = RESULT_FILE)]
    output: PathBuf,

    /// Wait for Enter after the result has been saved.
    #[arg(long)]
    pause: bool,

    /// Language of console messages.
    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Language {
    En,
    Ru,
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        match language {
            Language::En => Locale::English,
            Language::Ru => Locale::Russian,
        }
    }
}
