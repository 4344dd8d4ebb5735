//! SL (Storstockholms Lokaltrafik) transport API client.
//!
//! Two endpoints are used:
//! - `GET /v1/sites?expand=true` returns the full directory of sites as a
//!   JSON array of objects with `name` and `id`.
//! - `GET /v1/sites/{id}/departures` returns an object whose `departures`
//!   array lists upcoming departures with their line.
//!
//! Requests go through the [`Transport`] trait so that the engine can be
//! driven by [`MockTransport`] in tests.

mod client;
mod decode;
mod error;
mod mock;
mod transport;

pub use client::{BASE_URL_ENV, SlClient, SlConfig, TIMEOUT_ENV};
pub use decode::{decode_departures, decode_departures_into, decode_sites, decode_sites_into};
pub use error::SlError;
pub use mock::MockTransport;
pub use transport::{HttpResponse, HttpTransport, Transport};
