mod credential;
mod descriptor;
mod result;

pub use credential::{Credential, ProbeSettings, TOKEN_ENV_VAR, default_user_agent};
pub use descriptor::{DEFAULT_SUCCESS_CODE, EndpointDescriptor, HttpMethod};
pub use result::{ProbeOutcome, ProbeReport, ProbeResult, classify_status};
