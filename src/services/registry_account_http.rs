//! Registry account client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::{AppError, Credential};
use crate::ports::{AccountUser, GITHUB_V3_MEDIA_TYPE, PackageInfo, RegistryAccount};

/// Maximum number of body characters kept in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP client for the registry's account endpoints.
#[derive(Clone)]
pub struct HttpRegistryAccount {
    api_url: Url,
    credential: Credential,
    user_agent: String,
    client: Client,
}

impl std::fmt::Debug for HttpRegistryAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRegistryAccount")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("credential", &"[REDACTED]")
            .finish()
    }
}

impl HttpRegistryAccount {
    pub fn new(
        api_url: Url,
        credential: Credential,
        user_agent: impl Into<String>,
        timeout_ms: u64,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { api_url, credential, user_agent: user_agent.into(), client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.as_str().trim_end_matches('/'), path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "registry lookup");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.credential.authorization())
            .header(ACCEPT, GITHUB_V3_MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| AppError::Registry(format!("GET {}: {}", path, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = response
            .text()
            .map_err(|e| AppError::Registry(format!("Failed to read {} response: {}", path, e)))?;
        let excerpt: String = text.chars().take(ERROR_BODY_LIMIT).collect();
        if !status.is_success() {
            return Err(AppError::Registry(format!(
                "GET {} returned {}: {}",
                path,
                status.as_u16(),
                excerpt
            )));
        }

        serde_json::from_str(&text).map(Some).map_err(|e| {
            AppError::Registry(format!("Failed to parse {}: {} (body: {})", path, e, excerpt))
        })
    }
}

impl RegistryAccount for HttpRegistryAccount {
    fn current_user(&self) -> Result<Option<AccountUser>, AppError> {
        self.get_json("user")
    }

    fn list_packages(&self, package_type: &str) -> Result<Option<Vec<PackageInfo>>, AppError> {
        self.get_json(&format!("user/packages?package_type={package_type}"))
    }

    fn package(&self, package_type: &str, name: &str) -> Result<Option<PackageInfo>, AppError> {
        self.get_json(&format!("user/packages/{package_type}/{name}"))
    }
}
