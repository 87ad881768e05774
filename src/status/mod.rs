mod model;
mod wire;

pub use model::Status;

use crate::core::{PvOutput, PvoError, client::STATUS_ENDPOINT};
use reqwest::Method;

impl PvOutput {
    /// Retrieve system status information and live output data.
    ///
    /// # Errors
    ///
    /// Returns [`PvoError::NoData`] when the system has not reported any
    /// status yet, and the usual transport / authentication errors of
    /// [`PvOutput::request`]. A malformed body yields [`PvoError::Decode`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(system_id = self.system_id())))]
    pub async fn status(&self) -> Result<Status, PvoError> {
        let text = self.request(STATUS_ENDPOINT, Method::GET, None).await?;
        Ok(wire::decode(&text)?)
    }
}
