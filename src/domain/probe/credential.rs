use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::domain::AppError;

/// Environment variable the entry point reads the token from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Opaque bearer token sent with every probe.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

impl Credential {
    /// Wrap a token. Empty or whitespace-only tokens are missing; tokens that
    /// cannot form an `Authorization` header value are invalid.
    pub fn new(token: impl Into<String>) -> Result<Self, AppError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::MissingCredential);
        }
        let credential = Self(token);
        HeaderValue::from_str(&credential.authorization())
            .map_err(|_| AppError::InvalidCredential)?;
        Ok(credential)
    }

    /// Read the token from `GITHUB_TOKEN`.
    pub fn from_env() -> Result<Self, AppError> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| AppError::MissingCredential)?;
        Self::new(token)
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("token {}", self.0)
    }
}

/// Per-sweep settings passed explicitly into [`crate::app::commands::probe::probe`].
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    credential: Credential,
    timeout: Duration,
    user_agent: String,
}

impl ProbeSettings {
    pub fn new(credential: Credential, timeout_ms: u64) -> Result<Self, AppError> {
        if timeout_ms == 0 {
            return Err(AppError::config_error("timeout_ms must be greater than 0"));
        }
        Ok(Self {
            credential,
            timeout: Duration::from_millis(timeout_ms),
            user_agent: default_user_agent(),
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

pub fn default_user_agent() -> String {
    format!("pkgprobe/{}", env!("CARGO_PKG_VERSION"))
}
