//! pvo: asynchronous client for the PVOutput API.
//!
//! Reads the live status and the static system information of one PVOutput
//! system. Both endpoints answer with positional, comma separated text, which
//! is decoded into [`Status`] and [`System`].

pub mod core;
pub mod status;
pub mod system;

pub use crate::core::{DecodeError, ErrorKind, PvOutput, PvOutputBuilder, PvoError};
pub use reqwest::Method;
pub use status::Status;
pub use system::System;

/// Install a `RUST_LOG`-driven fmt subscriber (default level `info`).
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() -> bool {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).try_init().is_ok()
}
