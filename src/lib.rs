//! pkgprobe: probe package-registry REST endpoints and validate YAML files.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{
    AccountOptions, AccountSummary, Lookup, RenderOptions, SweepOptions, YamlValidation,
    inspect_account, probe_endpoints, render, render_summary, render_validation, render_with,
    sweep, validate_yaml,
};
pub use domain::{
    AppError, Credential, EndpointDescriptor, HttpMethod, ProbeOutcome, ProbeReport, ProbeResult,
    ProbeSettings,
};
