//! Departure filters.
//!
//! Each filter is a predicate over one departure. The pipeline applies them
//! with a stable retain, so survivors keep their board order.

use std::fmt;
use std::str::FromStr;

use crate::domain::text::{contains_ignore_case, fold, parse_unsigned};
use crate::domain::{DepartureRecord, RecordList};
use crate::error::QueryError;

/// Returns true if a line designation satisfies a line filter.
///
/// Matches when the designation equals the filter (ASCII case-insensitive),
/// or starts with it and continues with a letter. A base line therefore
/// matches its lettered variants but not longer line numbers.
///
/// # Examples
///
/// ```
/// use slq::departures::line_matches;
///
/// assert!(line_matches("28", "28"));
/// assert!(line_matches("28s", "28"));
/// assert!(!line_matches("280", "28"));
/// assert!(!line_matches("28", "28s"));
/// ```
pub fn line_matches(designation: &str, filter: &str) -> bool {
    if designation.eq_ignore_ascii_case(filter) {
        return true;
    }

    let (d, f) = (designation.as_bytes(), filter.as_bytes());
    d.len() > f.len() && d[..f.len()].eq_ignore_ascii_case(f) && d[f.len()].is_ascii_alphabetic()
}

/// Vehicle mode inferred from the API's free-text line category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportKind {
    Metro,
    Bus,
    Train,
    Tram,
}

impl TransportKind {
    pub const ALL: [TransportKind; 4] = [
        TransportKind::Metro,
        TransportKind::Bus,
        TransportKind::Train,
        TransportKind::Tram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Metro => "metro",
            TransportKind::Bus => "bus",
            TransportKind::Train => "train",
            TransportKind::Tram => "tram",
        }
    }

    /// Swedish markers identifying this mode in a category string.
    fn markers(&self) -> &'static [&'static str] {
        match self {
            TransportKind::Metro => &["tunnelbanan"],
            TransportKind::Bus => &["buss", "närtrafiken"],
            TransportKind::Train => &["pendeltåg", "roslagsbanan"],
            TransportKind::Tram => &["spårväg"],
        }
    }

    /// Returns true if a line category string describes this mode.
    ///
    /// A missing category never matches.
    pub fn matches(&self, transport_group: Option<&str>) -> bool {
        let Some(group) = transport_group else {
            return false;
        };
        let group = fold(group);
        self.markers().iter().any(|marker| group.contains(marker))
    }
}

impl FromStr for TransportKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QueryError::InvalidFilterValue {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination filter, decided once from the user's text.
///
/// A purely numeric filter matches destinations whose text contains its
/// decimal digits; anything else is a case-insensitive name match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationFilter {
    text: String,
    digits: Option<String>,
}

impl DestinationFilter {
    pub fn parse(s: &str) -> Self {
        Self {
            text: s.to_string(),
            digits: parse_unsigned(s).map(|id| id.to_string()),
        }
    }

    /// The filter as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The normalised digits of a numeric filter.
    pub fn digits(&self) -> Option<&str> {
        self.digits.as_deref()
    }

    pub fn matches(&self, destination: &str) -> bool {
        match &self.digits {
            Some(digits) => destination.contains(digits.as_str()),
            None => contains_ignore_case(destination, &self.text),
        }
    }
}

/// The optional filters of a departures query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureFilters {
    pub line: Option<String>,
    pub transport: Option<TransportKind>,
    pub destination: Option<DestinationFilter>,
}

impl DepartureFilters {
    /// Keep departures matching every active filter.
    ///
    /// Filters run in a fixed order: line, transport category, destination.
    pub fn apply(&self, departures: &mut RecordList<DepartureRecord>) {
        if let Some(line) = &self.line {
            departures.retain(|d| line_matches(&d.line.designation, line));
        }
        if let Some(kind) = self.transport {
            departures.retain(|d| kind.matches(d.line.transport_group.as_deref()));
        }
        if let Some(destination) = &self.destination {
            departures.retain(|d| destination.matches(&d.destination));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_none() && self.transport.is_none() && self.destination.is_none()
    }
}
