use crate::core::PvoError;
use reqwest::{RequestBuilder, StatusCode};
use std::time::Duration;

/// Send the request and read the body as text, bounded by `timeout` as a whole.
///
/// Non-2xx statuses are returned to the caller unclassified; only transport
/// failures and the timeout become errors here.
pub(crate) async fn send_text(
    req: RequestBuilder,
    timeout: Duration,
) -> Result<(StatusCode, String), PvoError> {
    let round_trip = async {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        Ok::<_, reqwest::Error>((status, text))
    };

    match tokio::time::timeout(timeout, round_trip).await {
        Err(_elapsed) => Err(PvoError::Timeout { timeout }),
        Ok(Err(e)) if e.is_timeout() => Err(PvoError::Timeout { timeout }),
        Ok(Err(e)) => Err(PvoError::Connection(e)),
        Ok(Ok(pair)) => Ok(pair),
    }
}
