mod http_prober;
mod registry_account;

pub use http_prober::{
    ACCEPT, AUTHORIZATION, GITHUB_V3_MEDIA_TYPE, HttpProber, HttpReply, ProbeRequest,
    TransportFailure, USER_AGENT,
};
pub use registry_account::{AccountUser, PackageInfo, RegistryAccount};
