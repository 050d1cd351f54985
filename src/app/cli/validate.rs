//! YAML validation command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api;

#[derive(Args)]
pub struct ValidateArgs {
    /// YAML file to check
    pub file: PathBuf,
}

pub fn run_validate(args: ValidateArgs) -> i32 {
    let validation = api::validate_yaml(&args.file);
    for line in api::render_validation(&args.file, &validation) {
        println!("{}", line);
    }
    validation.exit_code()
}
