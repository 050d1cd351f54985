pub mod configuration;
pub mod error;
pub mod presets;
pub mod probe;
pub mod yaml_context;

pub use configuration::{EndpointEntry, ProbeConfig};
pub use error::AppError;
pub use presets::github_packages_preset;
pub use probe::{
    Credential, EndpointDescriptor, HttpMethod, ProbeOutcome, ProbeReport, ProbeResult,
    ProbeSettings, TOKEN_ENV_VAR, classify_status,
};
pub use yaml_context::{ErrorLocation, context_lines};
