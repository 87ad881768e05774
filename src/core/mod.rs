//! Core components of the `pvo` client.
//!
//! - The main [`PvOutput`] client and its builder.
//! - The [`PvoError`] taxonomy.
//! - Transport (`net`) and the positional decode rules (`wire`) shared by endpoints.

/// The main client (`PvOutput`), builder, and configuration.
pub mod client;
/// The primary error type (`PvoError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

pub use client::{PvOutput, PvOutputBuilder};
pub use error::{DecodeError, ErrorKind, PvoError};
