use crate::domain::{ProbeOutcome, ProbeReport, ProbeResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Follow each result line with its captured response headers.
    pub show_headers: bool,
}

/// One line per result: `<glyph> <url> [<method>] -> <outcome>`.
pub fn render(report: &ProbeReport) -> Vec<String> {
    render_with(report, RenderOptions::default())
}

pub fn render_with(report: &ProbeReport, options: RenderOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.len());
    for result in report {
        lines.push(render_result(result));
        if options.show_headers {
            lines.extend(
                result
                    .response_headers()
                    .iter()
                    .map(|(name, value)| format!("    {}: {}", name, value)),
            );
        }
    }
    lines
}

/// `Probed N endpoint(s): 2 Success, 1 NotFound`, outcomes in declaration order.
pub fn render_summary(report: &ProbeReport) -> String {
    let summary = report.summary();
    let counts: Vec<String> = ProbeOutcome::ALL
        .iter()
        .filter_map(|outcome| summary.get(outcome).map(|count| format!("{} {}", count, outcome)))
        .collect();
    format!("Probed {} endpoint(s): {}", report.len(), counts.join(", "))
}

fn render_result(result: &ProbeResult) -> String {
    let descriptor = result.descriptor();
    let mut line = format!(
        "{} {} [{}] -> {}",
        result.outcome().glyph(),
        descriptor.url(),
        descriptor.method(),
        result.outcome()
    );
    if let Some(status) = result.status_code() {
        line.push_str(&format!(" ({})", status));
    }
    if let Some(message) = result.message() {
        line.push_str(&format!(": {}", message));
    }
    line
}
