use std::time::Duration;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Every variant belongs to exactly one [`ErrorKind`]; match on
/// [`PvoError::kind`] when only the broad category matters.
#[derive(Debug, Error)]
pub enum PvoError {
    /// The request did not complete within the configured timeout.
    #[error("timeout occurred while connecting to the PVOutput API after {timeout:?}")]
    Timeout {
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// A network-level failure: connection refused, DNS resolution, socket errors.
    #[error("error occurred while communicating with the PVOutput API: {0}")]
    Connection(#[source] reqwest::Error),

    /// The API rejected the credentials (HTTP 401 or 403).
    #[error("authentication to the PVOutput API failed: status {status} at {url}")]
    Authentication {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The status endpoint answered HTTP 400, meaning no live data exists yet.
    #[error("PVOutput has no status data available for this system ({url})")]
    NoData {
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned any other unsuccessful HTTP status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body did not match the endpoint's positional layout.
    #[error("could not decode PVOutput response: {0}")]
    Decode(#[from] DecodeError),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client was configured with missing or invalid settings.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[source] reqwest::Error),
}

/// The broad failure categories surfaced by [`PvoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Timeouts and transport failures.
    Connection,
    /// HTTP 401 / 403.
    Authentication,
    /// HTTP 400 from the status endpoint.
    NoData,
    /// Everything else.
    Generic,
}

impl PvoError {
    /// Returns the category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => ErrorKind::Connection,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::NoData { .. } => ErrorKind::NoData,
            Self::Status { .. }
            | Self::Decode(_)
            | Self::Url(_)
            | Self::Config(_)
            | Self::Http(_) => ErrorKind::Generic,
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A failure to map a positional response into a typed record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The response did not split into the expected number of fields.
    #[error("{endpoint}: expected {expected} fields, found {found}")]
    FieldCount {
        /// The endpoint whose layout was violated.
        endpoint: &'static str,
        /// Number of fields the layout defines.
        expected: usize,
        /// Number of fields actually received.
        found: usize,
    },

    /// A numeric field was neither `NaN` nor a parseable number.
    #[error("field `{field}`: invalid number {value:?}")]
    Number {
        /// The field name.
        field: &'static str,
        /// The raw wire value.
        value: String,
    },

    /// A date field was not in `YYYYMMDD` form.
    #[error("field `{field}`: invalid date {value:?}")]
    Date {
        /// The field name.
        field: &'static str,
        /// The raw wire value.
        value: String,
    },

    /// A time-of-day field was not in `HH:MM` or `HH:MM:SS` form.
    #[error("field `{field}`: invalid time {value:?}")]
    Time {
        /// The field name.
        field: &'static str,
        /// The raw wire value.
        value: String,
    },

    /// A required field was empty.
    #[error("field `{field}` is required but was empty")]
    Missing {
        /// The field name.
        field: &'static str,
    },
}
