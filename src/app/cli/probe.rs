//! Probe command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, RenderOptions, SweepOptions};
use crate::domain::{AppError, Credential, EndpointDescriptor};

#[derive(Args)]
pub struct ProbeArgs {
    /// Endpoint to probe as "[METHOD ]URL" (repeatable, GET by default)
    #[arg(short, long = "endpoint", value_name = "[METHOD ]URL", value_parser = parse_endpoint)]
    pub endpoints: Vec<EndpointDescriptor>,
    /// TOML file listing [[endpoint]] tables
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Package owner for the GitHub Packages preset
    #[arg(long, requires = "package")]
    pub owner: Option<String>,
    /// Package name for the GitHub Packages preset
    #[arg(long, requires = "owner")]
    pub package: Option<String>,
    /// Per-request timeout in milliseconds
    #[arg(short, long)]
    pub timeout_ms: Option<u64>,
    /// Print captured response headers under each result
    #[arg(long)]
    pub show_headers: bool,
}

fn parse_endpoint(value: &str) -> Result<EndpointDescriptor, String> {
    value.parse().map_err(|e: AppError| e.to_string())
}

pub fn run_probe(credential: Credential, args: ProbeArgs) -> Result<i32, AppError> {
    let options = SweepOptions {
        config_path: args.config,
        endpoints: args.endpoints,
        owner: args.owner,
        package: args.package,
        timeout_ms: args.timeout_ms,
    };
    let report = api::sweep(credential, options)?;

    for line in api::render_with(&report, RenderOptions { show_headers: args.show_headers }) {
        println!("{}", line);
    }
    println!();
    println!("{}", api::render_summary(&report));

    Ok(0)
}
