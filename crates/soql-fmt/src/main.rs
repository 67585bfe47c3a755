//! soql-fmt CLI
//!
//! Command-line tool that rewrites SQL and SOQL queries in canonical form.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use soql_fmt::{process, Mode, Outcome, Source};

/// Canonical formatter for SQL and SOQL queries.
#[derive(Parser)]
#[command(name = "soql-fmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to format (reads standard input if none are given).
    files: Vec<PathBuf>,

    /// Exit with an error if any input is not in canonical form.
    #[arg(long, env = "SOQL_FMT_CHECK")]
    check: bool,

    /// Print the parsed tree as JSON instead of canonical text.
    #[arg(long, conflicts_with_all = ["check", "in_place"])]
    ast: bool,

    /// Rewrite files with their canonical text.
    #[arg(short, long, conflicts_with = "check", requires = "files")]
    in_place: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    const fn mode(&self) -> Mode {
        if self.ast {
            Mode::Ast
        } else if self.check {
            Mode::Check
        } else if self.in_place {
            Mode::InPlace
        } else {
            Mode::Print
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mode = cli.mode();
    let sources: Vec<Source> = if cli.files.is_empty() {
        vec![Source::Stdin]
    } else {
        cli.files.into_iter().map(Source::File).collect()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut not_canonical = 0usize;

    for source in &sources {
        let outcome = process(source, mode, &mut out)?;
        if mode == Mode::Check && outcome == Outcome::Reformatted {
            warn!("{} is not in canonical form", source.name());
            not_canonical += 1;
        }
    }

    if not_canonical > 0 {
        anyhow::bail!("{not_canonical} input(s) not in canonical form");
    }
    Ok(())
}
