//! The HTTP boundary.
//!
//! [`ApiClient`](crate::ApiClient) describes each call as an [`HttpRequest`]
//! and hands it to a [`Transport`]. The default transport is a blocking
//! `reqwest` client; tests and embedders can plug in their own.

use reqwest::Url;
use tracing::trace;

use crate::error::Error;

/// Failure reported by a transport before any HTTP status was received.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// First value of the header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one request synchronously. Non-2xx answers are responses, not
/// errors; only failures to obtain a response at all are `Err`.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking `reqwest` transport with an optional proxy.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds the underlying client, routing all traffic through `proxy` when
    /// one is given.
    pub fn new(proxy: Option<&str>) -> Result<Self, Error> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(proxy) = proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|source| Error::InvalidProxy { proxy: proxy.to_string(), source })?;
            builder = builder.proxy(proxy);
        }
        let client = builder.build().map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        trace!(status, len = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
