pub mod probe_config;

pub use probe_config::{EndpointEntry, ProbeConfig, parse_config_content};
