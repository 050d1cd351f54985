//! Probe configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, ProbeConfig};

/// Load the configuration at `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ProbeConfig, AppError> {
    let Some(path) = path else {
        return Ok(ProbeConfig::default());
    };

    if !path.is_file() {
        return Err(AppError::ConfigFileMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), endpoints = config.endpoints.len(), "loaded config");
    Ok(config)
}
