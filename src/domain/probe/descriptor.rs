//! Endpoint descriptors: a request target plus its success criteria.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::domain::AppError;

/// Status code treated as success when a descriptor does not list any.
pub const DEFAULT_SUCCESS_CODE: u16 = 200;

/// HTTP verbs a probe may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Head,
    Post,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 3] = [HttpMethod::Get, HttpMethod::Head, HttpMethod::Post];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidMethod(s.to_string()))
    }
}

/// A single request target and the status codes that count as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    url: Url,
    method: HttpMethod,
    expected_success_codes: BTreeSet<u16>,
}

impl EndpointDescriptor {
    /// Build a descriptor expecting the default success code.
    pub fn new(url: &str, method: HttpMethod) -> Result<Self, AppError> {
        Self::with_expected(url, method, [DEFAULT_SUCCESS_CODE])
    }

    /// Build a descriptor with an explicit set of success codes.
    pub fn with_expected(
        url: &str,
        method: HttpMethod,
        codes: impl IntoIterator<Item = u16>,
    ) -> Result<Self, AppError> {
        let parsed = Url::parse(url).map_err(|err| {
            AppError::invalid_descriptor(url, format!("not an absolute URL ({err})"))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::invalid_descriptor(
                url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let expected_success_codes: BTreeSet<u16> = codes.into_iter().collect();
        if expected_success_codes.is_empty() {
            return Err(AppError::invalid_descriptor(
                url,
                "expected status codes must not be empty",
            ));
        }
        if let Some(code) = expected_success_codes.iter().find(|c| !(100..=599).contains(*c)) {
            return Err(AppError::invalid_descriptor(
                url,
                format!("status code {code} is outside 100..=599"),
            ));
        }

        Ok(Self { url: parsed, method, expected_success_codes })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn expected_success_codes(&self) -> &BTreeSet<u16> {
        &self.expected_success_codes
    }

    /// Whether `status` is one of the codes this descriptor counts as success.
    pub fn expects(&self, status: u16) -> bool {
        self.expected_success_codes.contains(&status)
    }
}

/// Parses `"[METHOD ]URL"`, e.g. `"HEAD https://pkg.github.com/o/p/simple"`.
/// Without a method prefix the descriptor uses GET.
impl FromStr for EndpointDescriptor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once(char::is_whitespace) {
            Some((method, url)) => EndpointDescriptor::new(url.trim(), method.parse()?),
            None => EndpointDescriptor::new(trimmed, HttpMethod::Get),
        }
    }
}
