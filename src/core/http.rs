//! HTTP utilities for service communication

use std::time::Duration;

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every request: both endpoints answer with XML.
pub fn xml_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/xml, text/xml;q=0.9"),
    );
    h
}

/// Build the client shared by both fetches.
///
/// `timeout` of `None` leaves requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(xml_header_map());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
