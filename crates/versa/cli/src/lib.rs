//! VERSA conformance CLI
//!
//! Terminal front end for the VERSA 1.0 conformance suite:
//! - Run the scenario registry and render the conformance report
//! - List registered scenarios
//! - Validate a context, profile, or agent document against the schemas
//!
//! Reports go to stdout; logs go to stderr. The process exits with status 1
//! when a run falls below the required level or a document is invalid.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{list, run, validate};
pub use error::{CliError, CliResult};

/// VERSA conformance CLI application
#[derive(Parser)]
#[command(name = "versa-conformance")]
#[command(about = "VERSA 1.0 conformance suite", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "VERSA_CONFORMANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run conformance scenarios and print the report
    Run(run::RunArgs),

    /// List registered scenarios
    List(list::ListArgs),

    /// Validate a VERSA document against its schema
    Validate(validate::ValidateArgs),
}

/// Whether a command succeeded, mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Pass => ExitCode::SUCCESS,
            Self::Fail => ExitCode::FAILURE,
        }
    }
}

/// Run using the current process arguments.
pub async fn run() -> CliResult<Verdict> {
    run_with_args(std::env::args_os()).await
}

/// Run using the provided argument iterator.
pub async fn run_with_args<I, T>(args: I) -> CliResult<Verdict>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::execute(args, cli.config.as_deref()).await,
        Commands::List(args) => list::execute(args),
        Commands::Validate(args) => validate::execute(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    // A second initialization in the same process is a no-op.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
