//! API Facade for the application.
//!
//! This module glues configuration loading, the HTTP adapters, and command
//! execution together for the CLI and for library callers.

use std::path::{Path, PathBuf};

use crate::app::commands::{account, probe, validate};
use crate::app::config::load_config;
use crate::domain::presets::validate_segment;
use crate::domain::{
    Credential, EndpointDescriptor, ProbeConfig, ProbeSettings, github_packages_preset,
};
use crate::services::{HttpProbeClient, HttpRegistryAccount};

pub use crate::app::commands::account::{AccountSummary, Lookup};
pub use crate::app::commands::probe::{RenderOptions, render, render_summary, render_with};
pub use crate::app::commands::validate::{YamlValidation, render_validation};
pub use crate::domain::{AppError, ProbeOutcome, ProbeReport, ProbeResult};

/// Probe `descriptors` in order with a fresh HTTP client.
///
/// An empty credential fails with [`AppError::MissingCredential`] before any
/// request is issued.
pub fn probe_endpoints(
    descriptors: &[EndpointDescriptor],
    credential: &str,
    timeout_ms: u64,
) -> Result<ProbeReport, AppError> {
    let settings = ProbeSettings::new(Credential::new(credential)?, timeout_ms)?;
    let prober = HttpProbeClient::new()?;
    probe::probe(&prober, descriptors, &settings)
}

/// Where a sweep takes its endpoints and limits from.
#[derive(Debug, Clone, Default)]
pub struct SweepOptions {
    pub config_path: Option<PathBuf>,
    /// Endpoints given directly, probed after those from the config file.
    pub endpoints: Vec<EndpointDescriptor>,
    pub owner: Option<String>,
    pub package: Option<String>,
    /// Overrides `timeout_ms` from the config file.
    pub timeout_ms: Option<u64>,
}

/// Run a full probe sweep.
pub fn sweep(credential: Credential, options: SweepOptions) -> Result<ProbeReport, AppError> {
    let config = load_config(options.config_path.as_deref())?;
    let descriptors = collect_descriptors(&config, &options)?;
    let settings = ProbeSettings::new(credential, options.timeout_ms.unwrap_or(config.timeout_ms))?
        .with_user_agent(config.user_agent.clone());

    let prober = HttpProbeClient::new()?;
    tracing::info!(endpoints = descriptors.len(), "starting probe sweep");
    probe::probe(&prober, &descriptors, &settings)
}

fn collect_descriptors(
    config: &ProbeConfig,
    options: &SweepOptions,
) -> Result<Vec<EndpointDescriptor>, AppError> {
    let mut descriptors = config.descriptors()?;
    descriptors.extend(options.endpoints.iter().cloned());

    match (&options.owner, &options.package) {
        (Some(owner), Some(package)) => {
            descriptors.extend(github_packages_preset(owner, package, &config.api_url)?);
        }
        (None, None) => {}
        _ => return Err(AppError::config_error("--owner and --package must be given together")),
    }

    Ok(descriptors)
}

#[derive(Debug, Clone, Default)]
pub struct AccountOptions {
    pub config_path: Option<PathBuf>,
    pub package: Option<String>,
}

/// Look up the authenticated user and their Python packages.
///
/// A package name that is not a single path segment is rejected before any
/// request is made.
pub fn inspect_account(
    credential: Credential,
    options: AccountOptions,
) -> Result<AccountSummary, AppError> {
    if let Some(package) = &options.package {
        validate_segment("package", package)?;
    }
    let config = load_config(options.config_path.as_deref())?;
    let client = HttpRegistryAccount::new(
        config.api_url.clone(),
        credential,
        config.user_agent.clone(),
        config.timeout_ms,
    )?;
    Ok(account::inspect_account(&client, options.package.as_deref()))
}

/// Check that the file at `path` is syntactically valid YAML.
pub fn validate_yaml(path: &Path) -> YamlValidation {
    validate::validate_yaml(path)
}
