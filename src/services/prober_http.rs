//! HTTP prober implementation using reqwest.

use std::collections::BTreeMap;
use std::error::Error as StdError;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;

use crate::domain::{AppError, HttpMethod};
use crate::ports::{HttpProber, HttpReply, ProbeRequest, TransportFailure};

/// Blocking prober. Redirects are not followed and idle connections are not
/// kept, so each probe opens and releases its own connection.
#[derive(Debug, Clone)]
pub struct HttpProbeClient {
    client: Client,
}

impl HttpProbeClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpProber for HttpProbeClient {
    fn send(&self, request: &ProbeRequest) -> Result<HttpReply, TransportFailure> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Post => Method::POST,
        };

        let mut builder =
            self.client.request(method, request.url.clone()).timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if request.method == HttpMethod::Post {
            builder = builder.body(Vec::<u8>::new());
        }

        let response = builder.send().map_err(transport_failure)?;

        Ok(HttpReply {
            status: response.status().as_u16(),
            headers: collect_headers(response.headers()),
        })
    }
}

fn transport_failure(error: reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        return TransportFailure::Timeout;
    }
    TransportFailure::Other(describe_error(&error))
}

/// Join an error with its sources, e.g. `error sending request: connection refused`.
fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}
