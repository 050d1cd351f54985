//! Endpoint probe sweep.

mod render;

pub use render::{RenderOptions, render, render_summary, render_with};

use crate::domain::{AppError, EndpointDescriptor, ProbeReport, ProbeResult, ProbeSettings};
use crate::ports::{HttpProber, ProbeRequest, TransportFailure};

/// Probe every descriptor in order and collect one result per descriptor.
///
/// Probes run one at a time. Per-endpoint failures become results; only an
/// empty descriptor list is an error.
pub fn probe<P: HttpProber>(
    prober: &P,
    descriptors: &[EndpointDescriptor],
    settings: &ProbeSettings,
) -> Result<ProbeReport, AppError> {
    if descriptors.is_empty() {
        return Err(AppError::NoDescriptors);
    }

    let mut report = ProbeReport::with_capacity(descriptors.len());
    for descriptor in descriptors {
        report.push(probe_one(prober, descriptor, settings));
    }
    Ok(report)
}

fn probe_one<P: HttpProber>(
    prober: &P,
    descriptor: &EndpointDescriptor,
    settings: &ProbeSettings,
) -> ProbeResult {
    let request = ProbeRequest::new(descriptor, settings);
    tracing::debug!(method = %request.method, url = %request.url, "probing endpoint");

    let result = match prober.send(&request) {
        Ok(reply) => ProbeResult::from_status(descriptor.clone(), reply.status, reply.headers),
        Err(TransportFailure::Timeout) => {
            ProbeResult::timeout(descriptor.clone(), settings.timeout())
        }
        Err(TransportFailure::Other(message)) => {
            ProbeResult::transport_error(descriptor.clone(), message)
        }
    };

    tracing::info!(
        method = %descriptor.method(),
        url = %descriptor.url(),
        outcome = %result.outcome(),
        status = ?result.status_code(),
        "probe finished"
    );
    result
}
