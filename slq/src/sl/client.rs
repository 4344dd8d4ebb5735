//! SL transport API client.

use tracing::{debug, warn};

use crate::domain::{DepartureRecord, RecordList, StopRecord};

use super::decode::{decode_departures, decode_sites};
use super::error::SlError;
use super::transport::{HttpTransport, Transport};

/// Default base URL for the SL transport API.
const DEFAULT_BASE_URL: &str = "https://transport.integration.sl.se";

/// Default user agent sent with every request.
const DEFAULT_USER_AGENT: &str = "slq/1.0";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SLQ_BASE_URL";

/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SLQ_TIMEOUT_SECS";

/// Configuration for the SL client.
#[derive(Debug, Clone)]
pub struct SlConfig {
    /// Base URL for the API (defaults to production SL)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent identifying this tool
    pub user_agent: String,
}

impl SlConfig {
    /// Default config with overrides from `SLQ_BASE_URL` and `SLQ_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup.
    ///
    /// An unparsable timeout is ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %raw, "ignoring invalid {TIMEOUT_ENV}"),
            }
        }
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for SlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// SL transport API client.
///
/// Created once per invocation and shared by reference between station
/// resolution and the departures fetch.
#[derive(Debug, Clone)]
pub struct SlClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl SlClient<HttpTransport> {
    /// Create a client that talks HTTP.
    pub fn new(config: &SlConfig) -> Result<Self, SlError> {
        Ok(Self::with_transport(HttpTransport::new(config)?, config))
    }
}

impl<T: Transport> SlClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T, config: &SlConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of the full sites directory.
    pub fn sites_url(&self) -> String {
        format!("{}/v1/sites?expand=true", self.base_url)
    }

    /// URL of the departures board for a site.
    pub fn departures_url(&self, site_id: u32) -> String {
        format!("{}/v1/sites/{}/departures", self.base_url, site_id)
    }

    /// Fetch and decode the full sites directory.
    pub fn fetch_sites(&self) -> Result<RecordList<StopRecord>, SlError> {
        let body = self.get_ok(&self.sites_url())?;
        decode_sites(&body)
    }

    /// Fetch and decode the departures board of a site.
    pub fn fetch_departures(&self, site_id: u32) -> Result<RecordList<DepartureRecord>, SlError> {
        let body = self.get_ok(&self.departures_url(site_id))?;
        decode_departures(&body)
    }

    /// GET a URL, accepting only 200 OK.
    fn get_ok(&self, url: &str) -> Result<String, SlError> {
        let response = self.transport.get(url)?;
        if response.status != 200 {
            debug!(url, status = response.status, "non-200 response");
            return Err(SlError::Status {
                status: response.status,
            });
        }
        Ok(response.body)
    }
}
