use std::io;

use thiserror::Error;

/// Library-wide error type for pkgprobe operations.
///
/// Per-endpoint results (not found, forbidden, timeouts, transport failures)
/// are reported through [`crate::domain::ProbeOutcome`] and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No usable credential was supplied.
    #[error("Missing credential: set GITHUB_TOKEN to a non-empty access token")]
    MissingCredential,

    /// The credential cannot be sent as an HTTP header value.
    #[error("Invalid credential: GITHUB_TOKEN is not a valid HTTP header value")]
    InvalidCredential,

    /// The probe sweep was started without any endpoints.
    #[error("No endpoints to probe. Pass --endpoint, --owner/--package, or a config file.")]
    NoDescriptors,

    /// An endpoint descriptor could not be built.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidDescriptor { url: String, reason: String },

    /// HTTP method outside the supported set.
    #[error("Invalid HTTP method '{0}': must be one of GET, HEAD, POST")]
    InvalidMethod(String),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file referenced on the command line does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Registry API call failed outside the probe sweep.
    #[error("Registry request failed: {0}")]
    Registry(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    pub(crate) fn invalid_descriptor(url: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidDescriptor { url: url.into(), reason: reason.into() }
    }
}
