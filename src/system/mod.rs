mod model;
mod wire;

pub use model::System;

use crate::core::{PvOutput, PvoError, client::SYSTEM_ENDPOINT};
use reqwest::Method;

impl PvOutput {
    /// Retrieve information about the system.
    ///
    /// # Errors
    ///
    /// Returns the transport / authentication errors of [`PvOutput::request`],
    /// or [`PvoError::Decode`] if the body does not match the expected layout.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(system_id = self.system_id())))]
    pub async fn system(&self) -> Result<System, PvoError> {
        let text = self.request(SYSTEM_ENDPOINT, Method::GET, None).await?;
        Ok(wire::decode(&text)?)
    }
}
