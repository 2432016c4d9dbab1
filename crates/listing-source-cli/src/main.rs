//! listing-source: print which listing provider produced a JSON file.
//!
//! Usage: `listing-source <path>`
//!
//! Prints exactly one line: the provider name, `invalid source`, or
//! `Error: <message>`. Exits 1 without output if the argument count is wrong.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use listing_source_core::SourceIdentifier;
use tracing_subscriber::EnvFilter;

const EXIT_USAGE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "listing-source")]
#[command(about = "Identify the listing provider that produced a JSON file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the JSON document
    path: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let Some(cli) = parse_args(env::args_os()) else {
        return ExitCode::from(EXIT_USAGE);
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Parse `argv`, accepting exactly one argument as the path.
///
/// The argument is taken verbatim, so `--`, `-` and `-x` are all paths.
fn parse_args<I>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() != 2 {
        tracing::debug!(count = args.len().saturating_sub(1), "expected exactly one argument");
        return None;
    }

    let [program, path] = <[OsString; 2]>::try_from(args).ok()?;
    match Cli::try_parse_from([program, OsString::from("--"), path]) {
        Ok(cli) => Some(cli),
        Err(err) => {
            tracing::debug!(error = %err, "invalid arguments");
            None
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let identifier = SourceIdentifier::new();
    let classification = identifier.classify_file(&cli.path);
    tracing::info!(path = %cli.path.display(), result = %classification, "classified");

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", classification).context("failed to write result")?;
    Ok(())
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}
