//! Account command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, AccountOptions};
use crate::app::commands::account::render_account;
use crate::domain::{AppError, Credential};

#[derive(Args)]
pub struct AccountArgs {
    /// Also look up this package by name
    #[arg(short, long)]
    pub package: Option<String>,
    /// TOML file providing api_url, user_agent and timeout_ms
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run_account(credential: Credential, args: AccountArgs) -> Result<i32, AppError> {
    let summary = api::inspect_account(
        credential,
        AccountOptions { config_path: args.config, package: args.package },
    )?;

    for line in render_account(&summary) {
        println!("{}", line);
    }
    Ok(0)
}
