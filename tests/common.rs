#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use pvo::PvOutput;
use std::time::Duration;
use url::Url;

pub const API_KEY: &str = "fake";
pub const SYSTEM_ID: u64 = 12345;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn api_root(server: &MockServer) -> Url {
    Url::parse(&format!("{}/service/r2/", server.base_url())).unwrap()
}

pub fn client(server: &MockServer) -> PvOutput {
    PvOutput::builder()
        .api_key(API_KEY)
        .system_id(SYSTEM_ID)
        .base_url(api_root(server))
        .build()
        .unwrap()
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> PvOutput {
    PvOutput::builder()
        .api_key(API_KEY)
        .system_id(SYSTEM_ID)
        .base_url(api_root(server))
        .timeout(timeout)
        .build()
        .unwrap()
}

/// Mock a GET endpoint that requires the API key headers.
pub fn mock_get<'a>(server: &'a MockServer, endpoint: &str, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/service/r2/{endpoint}"))
            .header("x-pvoutput-apikey", API_KEY)
            .header("x-pvoutput-systemid", SYSTEM_ID.to_string());
        then.status(status)
            .header("content-type", "text/plain")
            .body(body);
    })
}
