//! gommit - CLI entry point.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gommit::git::SystemGit;
use gommit::message::Overrides;
use gommit::workflow::{RunOptions, run};

/// Environment variable holding a tracing filter directive.
const LOG_ENV_VAR: &str = "GOMMIT_LOG";

/// Commit with per-branch message prefixes and suffixes.
#[derive(Parser, Debug)]
#[command(name = "gommit")]
#[command(about = "Commit with per-branch message prefixes and suffixes")]
#[command(version)]
struct Cli {
    /// Use the given message as `git commit -m <msg>` with the configured prefix and suffix
    #[arg(short = 'm', long = "message", default_value = "", allow_hyphen_values = true)]
    message: String,

    /// Use the given prefix and save it as the default prefix for this branch
    #[arg(long = "pre", value_name = "PREFIX", allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Use the given suffix and save it as the default suffix for this branch
    #[arg(long = "suf", value_name = "SUFFIX", allow_hyphen_values = true)]
    suffix: Option<String>,

    /// Print the composed message without committing or saving
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e, &mut std::io::stdout());
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse_from(normalize_single_dash_flags(std::env::args_os()));

    init_tracing(cli.verbose);

    let git = SystemGit::detect().context("git is required")?;
    let cwd = std::env::current_dir().context("Can't get current directory")?;

    let options = RunOptions {
        message: cli.message,
        overrides: Overrides {
            prefix: cli.prefix,
            suffix: cli.suffix,
        },
        dry_run: cli.dry_run,
    };

    run(&options, &cwd, &git)?;

    Ok(())
}

/// Print a failure with its context chain to `out` (stdout in `main`).
fn report_failure(err: &anyhow::Error, out: &mut impl Write) {
    let _ = writeln!(out, "{:#}", err);
}

/// Set up stderr logging filtered by `GOMMIT_LOG`, or by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Rewrite `-pre`/`-suf` (and their `=value` forms) to `--pre`/`--suf`.
///
/// Values of flags are never rewritten, so `-m -pre` commits the message
/// "-pre".
fn normalize_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut takes_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        let rewritten = match s {
            "-pre" | "-suf" => Some(format!("-{}", s)),
            _ if s.starts_with("-pre=") || s.starts_with("-suf=") => Some(format!("-{}", s)),
            _ => None,
        };

        takes_value = matches!(
            s,
            "-m" | "--message" | "-pre" | "-suf" | "--pre" | "--suf"
        ) || is_short_cluster_ending_in_m(s);

        match rewritten {
            Some(r) => normalized.push(OsString::from(r)),
            None => normalized.push(arg),
        }
    }

    normalized
}

/// A bundle of short flags whose last one is `-m`, such as `-vm`.
fn is_short_cluster_ending_in_m(s: &str) -> bool {
    s.len() > 2
        && s.starts_with('-')
        && !s.starts_with("--")
        && s.ends_with('m')
        && s[1..].chars().all(|c| c.is_ascii_alphabetic())
}
