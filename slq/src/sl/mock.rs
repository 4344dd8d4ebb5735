//! Mock transport for testing without network access.
//!
//! Serves canned responses keyed by URL and records every request, so tests
//! can check which endpoints were (or were not) called.

use std::cell::RefCell;
use std::collections::HashMap;

use super::error::SlError;
use super::transport::{HttpResponse, Transport};

/// Transport that answers from a table of canned responses.
///
/// URLs without a canned response answer 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, HttpResponse>>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the response for a URL, replacing any previous one.
    pub fn respond(&self, url: impl Into<String>, status: u16, body: impl Into<String>) {
        self.responses.borrow_mut().insert(
            url.into(),
            HttpResponse {
                status,
                body: body.into(),
            },
        );
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, SlError> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self
            .responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or(HttpResponse {
                status: 404,
                body: String::new(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_registered_responses() {
        let mock = MockTransport::new();
        mock.respond("http://sl.test/a", 200, "[]");

        let response = mock.get("http://sl.test/a").unwrap();
        assert_eq!(response, HttpResponse::ok("[]"));
    }

    #[test]
    fn records_requests_in_order() {
        let mock = MockTransport::new();
        mock.get("http://sl.test/a").unwrap();
        mock.get("http://sl.test/b").unwrap();
        assert_eq!(mock.requests(), vec!["http://sl.test/a", "http://sl.test/b"]);
    }

    #[test]
    fn unknown_url_answers_404() {
        let mock = MockTransport::new();
        assert_eq!(mock.get("http://sl.test/missing").unwrap().status, 404);
    }
}
