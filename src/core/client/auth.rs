//! API key and system id headers for PVOutput endpoints.

use super::constants::{HEADER_API_KEY, HEADER_SYSTEM_ID};
use crate::core::error::PvoError;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

impl super::PvOutput {
    /// Headers sent with every request.
    ///
    /// The API answers in plain text regardless of `Accept`, but the header is
    /// still expected.
    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, PvoError> {
        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);

        let mut key = header_value(HEADER_API_KEY, &self.api_key)?;
        key.set_sensitive(true);
        headers.insert(HEADER_API_KEY, key);
        headers.insert(HEADER_SYSTEM_ID, HeaderValue::from(self.system_id));

        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, PvoError> {
    HeaderValue::from_str(value)
        .map_err(|_| PvoError::config(format!("{name} contains characters not allowed in a header")))
}
