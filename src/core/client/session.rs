//! Lazy HTTP session lifecycle.
//!
//! A session is either supplied by the caller (borrowed, never released here)
//! or created on first use (owned, released by `close` / drop).

use crate::core::error::PvoError;
use reqwest::Client;

#[derive(Debug)]
pub(crate) struct Session {
    http: Option<Client>,
    owned: bool,
}

impl Session {
    pub(crate) const fn empty() -> Self {
        Self {
            http: None,
            owned: false,
        }
    }

    pub(crate) const fn borrowed(http: Client) -> Self {
        Self {
            http: Some(http),
            owned: false,
        }
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.http.is_some()
    }

    /// Drop the session if this client created it. Returns whether anything was released.
    pub(crate) fn release(&mut self) -> bool {
        if !self.owned {
            return false;
        }
        self.owned = false;
        self.http.take().is_some()
    }
}

impl super::PvOutput {
    /// Return the current session, creating and taking ownership of one if none is held.
    ///
    /// The lock is only held while the handle is cloned; `reqwest::Client` is
    /// reference counted, so in-flight requests keep the pool alive.
    pub(crate) async fn session(&self) -> Result<Client, PvoError> {
        let mut guard = self.session.lock().await;
        if let Some(http) = &guard.http {
            return Ok(http.clone());
        }

        let http = Client::builder().build().map_err(PvoError::Http)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("created internal HTTP session");

        guard.http = Some(http.clone());
        guard.owned = true;
        Ok(http)
    }
}
