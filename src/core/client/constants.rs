//! Centralized constants for the default endpoint, headers and timeout.

use std::time::Duration;

/// Identifies this client to the API.
pub(crate) const USER_AGENT: &str = concat!("pvo-rs/", env!("CARGO_PKG_VERSION"));

/// PVOutput API root; endpoint names are joined onto it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://pvoutput.org/service/r2/";

/// Per-request timeout applied when none is configured.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

pub(crate) const HEADER_API_KEY: &str = "X-Pvoutput-Apikey";
pub(crate) const HEADER_SYSTEM_ID: &str = "X-Pvoutput-SystemId";

/// Live status endpoint. An HTTP 400 from here means "no data yet".
pub(crate) const STATUS_ENDPOINT: &str = "getstatus.jsp";

/// System information endpoint.
pub(crate) const SYSTEM_ENDPOINT: &str = "getsystem.jsp";
