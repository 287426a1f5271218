//! basic-lexer - tokenizes line-numbered BASIC programs.
//!
//! Reads a program from a file (or an inline `--eval` literal), runs the
//! lexer over it and prints one token per line.

use std::{path::PathBuf, process::ExitCode, time::Instant};

use basic_lexer::{display_error, lexer::lexer::tokenize, read_source, write_tokens};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tokenize a line-numbered BASIC program and print its tokens
#[derive(Parser, Debug)]
#[command(name = "basic-lexer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a line-numbered BASIC program", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Tokenize the given source text instead of a file
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Include newline tokens in the output
    #[arg(long, env = "BASIC_LEXER_SHOW_NEWLINES")]
    show_newlines: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "BASIC_LEXER_VERBOSE")]
    verbose: bool,

    /// Disable color output in logs
    #[arg(long, env = "BASIC_LEXER_NO_COLOR")]
    no_color: bool,
}

fn init_logging(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    // A subscriber may already be installed when embedded; keep going.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let (source, file_name) = match (&cli.eval, &cli.file) {
        (Some(code), _) => (code.clone(), None),
        (None, Some(path)) => match read_source(path) {
            Ok(source) => (source, Some(path.to_string_lossy().into_owned())),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        (None, None) => unreachable!("clap requires a file or --eval"),
    };

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), file_name) {
        Ok(tokens) => tokens,
        Err(e) => {
            error!("{}", e);
            display_error(&e, &source);
            return ExitCode::from(1);
        }
    };
    info!("Tokenized in {:?}", start.elapsed());

    let stdout = std::io::stdout();
    if let Err(e) = write_tokens(&mut stdout.lock(), &tokens, cli.show_newlines) {
        eprintln!("Error: failed to write tokens: {}", e);
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
