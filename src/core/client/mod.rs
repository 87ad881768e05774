//! Public client surface + builder.
//! Internals are split into `auth` (API key headers), `session` (lazy HTTP
//! session lifecycle) and `constants` (UA + defaults).

mod auth;
mod constants;
mod session;

use crate::core::{PvoError, net};
use constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::{Client, Method};
use session::Session;
use std::time::Duration;
use tokio::sync::Mutex;
use url::Url;

pub(crate) use constants::{STATUS_ENDPOINT, SYSTEM_ENDPOINT};

/// Client for the PVOutput API, bound to one API key and one system.
///
/// The client owns at most one HTTP session. If none was supplied through
/// [`PvOutputBuilder::http_client`], it is created on the first request and
/// released by [`PvOutput::close`] or when the client is dropped, whichever
/// comes first. A supplied session is never released by this client.
///
/// # Example
///
/// ```no_run
/// # use pvo::PvOutput;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pvoutput = PvOutput::new("API_KEY_FROM_PVOUTPUT_ORG", 60017)?;
/// let status = pvoutput.status().await?;
/// println!("{status:?}");
/// pvoutput.close().await;
/// # Ok(())
/// # }
/// ```
pub struct PvOutput {
    base_url: Url,
    api_key: String,
    system_id: u64,
    timeout: Duration,
    user_agent: String,
    session: Mutex<Session>,
}

impl PvOutput {
    /// Create a new builder.
    pub fn builder() -> PvOutputBuilder {
        PvOutputBuilder::default()
    }

    /// Shorthand for a client with the default endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PvoError::Config`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>, system_id: u64) -> Result<Self, PvoError> {
        Self::builder().api_key(api_key).system_id(system_id).build()
    }

    /// The system this client reads from.
    pub const fn system_id(&self) -> u64 {
        self.system_id
    }

    /// The per-request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether an HTTP session is currently held.
    pub async fn has_session(&self) -> bool {
        self.session.lock().await.is_open()
    }

    /// Issue a request against the API and return the raw response body.
    ///
    /// `uri` is relative to the API root, e.g. `getstatus.jsp`. When `form`
    /// is given it is sent form-encoded.
    ///
    /// # Errors
    ///
    /// - [`PvoError::Timeout`] if the round trip exceeds the configured timeout.
    /// - [`PvoError::Connection`] on transport failures.
    /// - [`PvoError::NoData`] for HTTP 400 from the status endpoint.
    /// - [`PvoError::Authentication`] for HTTP 401 / 403.
    /// - [`PvoError::Status`] for any other non-2xx status.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, form), err, fields(system_id = self.system_id)))]
    pub async fn request(
        &self,
        uri: &str,
        method: Method,
        form: Option<&[(&str, &str)]>,
    ) -> Result<String, PvoError> {
        let url = self.base_url.join(uri)?;
        let http = self.session().await?;

        let mut req = http
            .request(method, url.clone())
            .headers(self.auth_headers()?);
        if let Some(form) = form {
            req = req.form(form);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "dispatching PVOutput request");

        let (status, body) = net::send_text(req, self.timeout).await?;
        if status.is_success() {
            return Ok(body);
        }

        let err = classify_status(uri, status.as_u16(), url.as_str());

        #[cfg(feature = "tracing")]
        tracing::warn!(status = status.as_u16(), %url, kind = ?err.kind(), "PVOutput request failed");

        Err(err)
    }

    /// Release the HTTP session if this client created it.
    ///
    /// Safe to call any number of times; a session supplied by the caller is
    /// left untouched.
    pub async fn close(&self) {
        self.session.lock().await.release();
    }
}

impl std::fmt::Debug for PvOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PvOutput")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("system_id", &self.system_id)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Drop for PvOutput {
    fn drop(&mut self) {
        self.session.get_mut().release();
    }
}

fn classify_status(uri: &str, status: u16, url: &str) -> PvoError {
    let url = url.to_string();
    match status {
        400 if uri.starts_with(STATUS_ENDPOINT) => PvoError::NoData { url },
        401 | 403 => PvoError::Authentication { status, url },
        _ => PvoError::Status { status, url },
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PvOutputBuilder {
    api_key: Option<String>,
    system_id: Option<u64>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http: Option<Client>,
}

impl PvOutputBuilder {
    /// Set the PVOutput API key. Required.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the PVOutput system identifier. Required.
    #[must_use]
    pub const fn system_id(mut self, id: u64) -> Self {
        self.system_id = Some(id);
        self
    }

    /// Override the API root (e.g., `https://pvoutput.org/service/r2/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the per-request timeout. Default: 8 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Use an existing HTTP client instead of creating one lazily.
    ///
    /// The client is shared, never released by [`PvOutput::close`].
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`PvoError::Config`] if the API key or system id is missing, or
    /// if the base URL cannot have endpoints joined onto it, and
    /// [`PvoError::Url`] if the default base URL fails to parse.
    pub fn build(self) -> Result<PvOutput, PvoError> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| PvoError::config("an API key is required"))?;
        let system_id = self
            .system_id
            .ok_or_else(|| PvoError::config("a system id is required"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if base_url.cannot_be_a_base() {
            return Err(PvoError::config(format!(
                "base URL {base_url} cannot be used as an API root"
            )));
        }

        let session = match self.http {
            Some(http) => Session::borrowed(http),
            None => Session::empty(),
        };

        Ok(PvOutput {
            base_url,
            api_key,
            system_id,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
            session: Mutex::new(session),
        })
    }
}
