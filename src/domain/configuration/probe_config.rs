//! Probe configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::probe::{DEFAULT_SUCCESS_CODE, EndpointDescriptor, default_user_agent};

/// Configuration for a probe sweep, usually loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeConfig {
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Base URL of the registry REST API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Endpoints to probe, in order.
    #[serde(default, rename = "endpoint")]
    pub endpoints: Vec<EndpointEntry>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            api_url: default_api_url(),
            endpoints: Vec::new(),
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_ms == 0 {
            return Err(AppError::InvalidConfig("timeout_ms must be greater than 0".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::InvalidConfig("user_agent must not be empty".to_string()));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig("api_url must be an http(s) URL".to_string()));
        }
        Ok(())
    }

    /// Convert every `[[endpoint]]` entry into a descriptor, in file order.
    pub fn descriptors(&self) -> Result<Vec<EndpointDescriptor>, AppError> {
        self.endpoints.iter().map(EndpointEntry::to_descriptor).collect()
    }
}

/// One `[[endpoint]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EndpointEntry {
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_expected")]
    pub expected: Vec<u16>,
}

impl EndpointEntry {
    pub fn to_descriptor(&self) -> Result<EndpointDescriptor, AppError> {
        EndpointDescriptor::with_expected(
            &self.url,
            self.method.parse()?,
            self.expected.iter().copied(),
        )
    }
}

/// Parse and validate TOML configuration content.
pub fn parse_config_content(content: &str) -> Result<ProbeConfig, AppError> {
    let config: ProbeConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_expected() -> Vec<u16> {
    vec![DEFAULT_SUCCESS_CODE]
}
