use atty::Stream;
use clap::Parser;
use colored::Colorize;
use dbprobe::{EditorReader, Explorer, ProbeError, Result, SearchOutcome, StreamReader};
use std::io;
use tracing_subscriber::EnvFilter;

/// Search the rows of one table in a SQLite database by field values
#[derive(Parser, Debug)]
#[command(name = "dbprobe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Diagnostic log filter, written to stderr
    #[arg(long = "log", env = "DBPROBE_LOG", default_value = "warn")]
    log: String,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<SearchOutcome> {
    if atty::is(Stream::Stdin) {
        let reader = EditorReader::new()?;
        Explorer::new(reader, io::stdout(), io::stderr()).run()
    } else {
        let reader = StreamReader::new(io::stdin().lock(), io::stdout());
        Explorer::new(reader, io::stdout(), io::stderr()).run()
    }
}

fn report(e: &ProbeError) {
    let message = e.to_string();
    if atty::is(Stream::Stderr) {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{}", message);
    }
}
