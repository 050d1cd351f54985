mod prober_http;
mod registry_account_http;

pub use prober_http::HttpProbeClient;
pub use registry_account_http::HttpRegistryAccount;
