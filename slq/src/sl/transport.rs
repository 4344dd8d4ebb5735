//! Blocking HTTP transport.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use super::client::SlConfig;
use super::error::SlError;

/// Raw answer from the API: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// A synchronous GET.
///
/// Calls block the current thread until the server answers, the request
/// fails, or the timeout expires.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse, SlError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, SlError> {
        (**self).get(url)
    }
}

/// Transport backed by a single reusable `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build the HTTP client: JSON accept header, user agent, timeout,
    /// redirect following and certificate verification.
    pub fn new(config: &SlConfig) -> Result<Self, SlError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, SlError> {
        debug!(url, "GET");
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
