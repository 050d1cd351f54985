//! Filesystem-backed configuration loaders.
//!
//! Pure schema parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::load_config;
