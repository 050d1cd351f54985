//! CLI Adapter.

mod account;
mod probe;
mod validate;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, Credential};

#[derive(Parser)]
#[command(name = "pkgprobe")]
#[command(version)]
#[command(
    about = "Probe package-registry endpoints and validate YAML files",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe endpoints and print one line per result
    #[clap(visible_alias = "p")]
    Probe(probe::ProbeArgs),
    /// Show the authenticated user and their Python packages
    #[clap(visible_alias = "a")]
    Account(account::AccountArgs),
    /// Check a YAML file for syntax errors
    #[clap(visible_alias = "v")]
    ValidateYaml(validate::ValidateArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Probe(args) => Credential::from_env().and_then(|c| probe::run_probe(c, args)),
        Commands::Account(args) => {
            Credential::from_env().and_then(|c| account::run_account(c, args))
        }
        Commands::ValidateYaml(args) => Ok(validate::run_validate(args)),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 if quiet => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
