//! HTTP probe port definition.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::domain::{EndpointDescriptor, HttpMethod, ProbeSettings};

pub const AUTHORIZATION: &str = "Authorization";
pub const ACCEPT: &str = "Accept";
pub const USER_AGENT: &str = "User-Agent";

/// Media type requested from the registry API.
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// A single request issued by a probe.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub timeout: Duration,
}

impl ProbeRequest {
    /// Build the request for `descriptor` with the standard probe headers.
    pub fn new(descriptor: &EndpointDescriptor, settings: &ProbeSettings) -> Self {
        Self {
            method: descriptor.method(),
            url: descriptor.url().clone(),
            headers: vec![
                (AUTHORIZATION, settings.credential().authorization()),
                (ACCEPT, GITHUB_V3_MEDIA_TYPE.to_string()),
                (USER_AGENT, settings.user_agent().to_string()),
            ],
            timeout: settings.timeout(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for ProbeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if *name == AUTHORIZATION { (*name, "[REDACTED]") } else { (*name, value.as_str()) }
            })
            .collect();
        f.debug_struct("ProbeRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Status and headers of a received response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpReply {
    pub status: u16,
    /// Lower-case header names; repeated values joined with `", "`.
    pub headers: BTreeMap<String, String>,
}

impl HttpReply {
    pub fn new(status: u16) -> Self {
        Self { status, headers: BTreeMap::new() }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.to_string());
        self
    }
}

/// Failure before any HTTP response arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Port for issuing one request/response cycle.
pub trait HttpProber {
    fn send(&self, request: &ProbeRequest) -> Result<HttpReply, TransportFailure>;
}
