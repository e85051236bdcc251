//! CLI tool to highlight, dump and check Go source files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use goprint::{Mode, Options, RenderOptions, Source, TokenKind, render, tokenize};

/// Lossless Go tokenizer and syntax highlighter.
#[derive(Parser, Debug)]
#[command(name = "goprint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lossless Go tokenizer and syntax highlighter", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, env = "GOPRINT_VERBOSE")]
    verbose: bool,

    /// Disable color in log output
    #[arg(long, global = true, env = "GOPRINT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each file as a highlighted HTML fragment
    Html(HtmlArgs),

    /// Print the token stream of a file
    Tokens {
        /// Go source file
        file: PathBuf,
    },

    /// Report invalid tokens
    ///
    /// Exits with failure if any file contains a token the lexer could
    /// not recognize.
    Check {
        /// Go source files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct HtmlArgs {
    /// Go source files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Omit the line number column
    #[arg(long)]
    no_line_numbers: bool,

    /// Run the lexer and formatter on separate threads
    #[arg(long)]
    staged: bool,

    /// Channel capacity between stages (0 = rendezvous)
    #[arg(long, default_value_t = 0)]
    capacity: usize,
}

impl HtmlArgs {
    const fn options(&self) -> Options {
        let mode = if self.staged {
            Mode::Staged {
                capacity: self.capacity,
            }
        } else {
            Mode::Lazy
        };
        Options {
            mode,
            render: RenderOptions {
                line_numbers: !self.no_line_numbers,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let ok = match &cli.command {
        Command::Html(args) => html(args),
        Command::Tokens { file } => tokens(file),
        Command::Check { files } => check(files),
    };

    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Log to stderr so stdout carries only command output. `RUST_LOG`
/// takes precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), String> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {e}"))
}

fn html(args: &HtmlArgs) -> bool {
    let options = args.options();
    let mut had_error = false;

    for path in &args.files {
        let rendered = Source::read(path).and_then(|source| render(&source, options));
        match rendered {
            Ok(body) => println!(r#"<pre><code class="go">{body}</code></pre>"#),
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
            }
        }
    }

    !had_error
}

fn tokens(path: &Path) -> bool {
    let source = match Source::read(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            return false;
        }
    };

    for token in tokenize(&source) {
        println!(
            "{}\t{}\t{}\t{:?}",
            token.pos,
            token.kind,
            token.class(),
            token.text
        );
    }
    true
}

fn check(files: &[PathBuf]) -> bool {
    let mut had_error = false;

    for path in files {
        let source = match Source::read(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{e}");
                had_error = true;
                continue;
            }
        };

        let mut invalid = 0usize;
        for token in tokenize(&source) {
            if token.kind == TokenKind::Invalid {
                println!(
                    "{}:{}: invalid token {:?}",
                    source.name(),
                    token.pos,
                    token.text
                );
                invalid += 1;
            }
        }

        if invalid == 0 {
            tracing::info!(name = source.name(), "no invalid tokens");
        } else {
            had_error = true;
        }
    }

    !had_error
}
