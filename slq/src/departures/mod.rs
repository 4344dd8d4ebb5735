//! Departure queries.
//!
//! A query resolves its station to a site id, fetches that site's board,
//! then narrows it with the line, transport and destination filters in that
//! order. Truncation to the requested count happens last, on the survivors.

mod filter;

use tracing::debug;

use crate::domain::{DepartureRecord, RecordList};
use crate::error::QueryError;
use crate::sl::{SlClient, Transport};
use crate::stations::resolve_station;

pub use filter::{DepartureFilters, DestinationFilter, TransportKind, line_matches};

/// A departures request for one station.
///
/// # Examples
///
/// ```
/// use slq::departures::{DepartureQuery, TransportKind};
///
/// let query = DepartureQuery::new("T-Centralen")
///     .with_line("14")
///     .with_transport("metro")
///     .unwrap();
/// assert_eq!(query.filters.transport, Some(TransportKind::Metro));
///
/// assert!(DepartureQuery::new("T-Centralen").with_transport("boat").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureQuery {
    /// Station name or numeric site id, as typed.
    pub station: String,
    pub filters: DepartureFilters,
}

impl DepartureQuery {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            filters: DepartureFilters::default(),
        }
    }

    /// Only keep departures on this line or its lettered variants.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.filters.line = Some(line.into());
        self
    }

    /// Only keep departures of this transport type.
    ///
    /// Fails with `InvalidFilterValue` unless the value is one of `metro`,
    /// `bus`, `train` or `tram`.
    pub fn with_transport(mut self, value: &str) -> Result<Self, QueryError> {
        self.filters.transport = Some(value.parse()?);
        Ok(self)
    }

    /// Only keep departures whose destination matches.
    pub fn with_destination(mut self, value: &str) -> Self {
        self.filters.destination = Some(DestinationFilter::parse(value));
        self
    }

    /// Resolve the station, fetch its board and apply the filters.
    ///
    /// An empty board after filtering is a successful result.
    pub fn run<T: Transport>(&self, client: &SlClient<T>) -> Result<DepartureBoard, QueryError> {
        let site_id = resolve_station(client, &self.station)?;
        let mut departures = client.fetch_departures(site_id)?;
        let fetched = departures.len();

        self.filters.apply(&mut departures);
        debug!(
            site_id,
            fetched,
            kept = departures.len(),
            "filtered departures"
        );

        Ok(DepartureBoard {
            site_id,
            departures,
        })
    }
}

/// Filtered departures of one site, in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureBoard {
    pub site_id: u32,
    departures: RecordList<DepartureRecord>,
}

impl DepartureBoard {
    /// Every departure that survived filtering.
    pub fn departures(&self) -> &RecordList<DepartureRecord> {
        &self.departures
    }

    /// The first `count` departures, or all of them if fewer survived.
    pub fn limited(&self, count: usize) -> &[DepartureRecord] {
        self.departures.first(count)
    }

    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}
