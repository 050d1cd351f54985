//! Probe outcomes and the ordered report they form.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use super::EndpointDescriptor;

/// Classification of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProbeOutcome {
    Success,
    NotFound,
    Forbidden,
    Timeout,
    TransportError,
    UnexpectedStatus,
}

impl ProbeOutcome {
    pub const ALL: [ProbeOutcome; 6] = [
        ProbeOutcome::Success,
        ProbeOutcome::NotFound,
        ProbeOutcome::Forbidden,
        ProbeOutcome::Timeout,
        ProbeOutcome::TransportError,
        ProbeOutcome::UnexpectedStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeOutcome::Success => "Success",
            ProbeOutcome::NotFound => "NotFound",
            ProbeOutcome::Forbidden => "Forbidden",
            ProbeOutcome::Timeout => "Timeout",
            ProbeOutcome::TransportError => "TransportError",
            ProbeOutcome::UnexpectedStatus => "UnexpectedStatus",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ProbeOutcome::Success => "✅",
            ProbeOutcome::NotFound | ProbeOutcome::TransportError => "❌",
            ProbeOutcome::Forbidden | ProbeOutcome::UnexpectedStatus => "⚠️",
            ProbeOutcome::Timeout => "⏱️",
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an HTTP status for `descriptor`.
///
/// 404 and 403 win over the expected-code set; success additionally
/// requires a 2xx code.
pub fn classify_status(status: u16, descriptor: &EndpointDescriptor) -> ProbeOutcome {
    match status {
        404 => ProbeOutcome::NotFound,
        403 => ProbeOutcome::Forbidden,
        200..=299 if descriptor.expects(status) => ProbeOutcome::Success,
        _ => ProbeOutcome::UnexpectedStatus,
    }
}

/// Result of probing one descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    descriptor: EndpointDescriptor,
    outcome: ProbeOutcome,
    status_code: Option<u16>,
    message: Option<String>,
    response_headers: BTreeMap<String, String>,
}

impl ProbeResult {
    /// A response was received; headers are kept.
    pub fn from_status(
        descriptor: EndpointDescriptor,
        status: u16,
        response_headers: BTreeMap<String, String>,
    ) -> Self {
        let outcome = classify_status(status, &descriptor);
        Self { descriptor, outcome, status_code: Some(status), message: None, response_headers }
    }

    pub fn timeout(descriptor: EndpointDescriptor, limit: Duration) -> Self {
        Self {
            descriptor,
            outcome: ProbeOutcome::Timeout,
            status_code: None,
            message: Some(format!("no response within {} ms", limit.as_millis())),
            response_headers: BTreeMap::new(),
        }
    }

    pub fn transport_error(descriptor: EndpointDescriptor, message: impl Into<String>) -> Self {
        Self {
            descriptor,
            outcome: ProbeOutcome::TransportError,
            status_code: None,
            message: Some(message.into()),
            response_headers: BTreeMap::new(),
        }
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }

    pub fn outcome(&self) -> ProbeOutcome {
        self.outcome
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn response_headers(&self) -> &BTreeMap<String, String> {
        &self.response_headers
    }
}

/// Ordered probe results, one per descriptor in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { results: Vec::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, result: ProbeResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Count of results per outcome; outcomes that never occurred are omitted.
    pub fn summary(&self) -> BTreeMap<ProbeOutcome, usize> {
        let mut counts = BTreeMap::new();
        for result in &self.results {
            *counts.entry(result.outcome).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a ProbeReport {
    type Item = &'a ProbeResult;
    type IntoIter = std::slice::Iter<'a, ProbeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl FromIterator<ProbeResult> for ProbeReport {
    fn from_iter<I: IntoIterator<Item = ProbeResult>>(iter: I) -> Self {
        Self { results: iter.into_iter().collect() }
    }
}
