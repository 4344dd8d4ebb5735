//! Decoding of SL API payloads into record lists.
//!
//! The top level of a payload must have the expected shape or decoding fails.
//! Individual elements that lack a required field, or carry one with the
//! wrong type, are skipped without error. A departure without a transport
//! category is skipped too: it could never be classified.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{
    DEPARTURE_LIST_CAPACITY, DepartureRecord, RecordList, STOP_LIST_CAPACITY, StopRecord,
};

use super::error::SlError;

/// One element of the sites directory. Only name and id are read.
#[derive(Debug, Deserialize)]
struct SiteDto<'a> {
    #[serde(borrow)]
    name: &'a str,
    id: u32,
}

/// One element of a departures board.
#[derive(Debug, Deserialize)]
struct DepartureDto<'a> {
    #[serde(borrow)]
    destination: &'a str,
    #[serde(borrow)]
    expected: &'a str,
    #[serde(borrow)]
    line: LineDto<'a>,
}

#[derive(Debug, Deserialize)]
struct LineDto<'a> {
    #[serde(borrow)]
    designation: &'a str,
    /// Free-text category, e.g. "Tunnelbanans gröna linje".
    #[serde(borrow, default)]
    group_of_lines: Option<&'a str>,
}

/// Decode the sites directory into a fresh list of stops.
pub fn decode_sites(payload: &str) -> Result<RecordList<StopRecord>, SlError> {
    decode_sites_into(payload, RecordList::with_capacity(STOP_LIST_CAPACITY)?)
}

/// Decode the sites directory, appending to `list`.
///
/// The list is consumed: if any append fails it is discarded and only the
/// error is returned.
pub fn decode_sites_into(
    payload: &str,
    mut list: RecordList<StopRecord>,
) -> Result<RecordList<StopRecord>, SlError> {
    let root: Value = serde_json::from_str(payload).map_err(|e| SlError::decode(e.to_string()))?;
    let sites = root
        .as_array()
        .ok_or_else(|| SlError::decode("expected JSON array of sites"))?;

    let mut skipped = 0usize;
    for (index, value) in sites.iter().enumerate() {
        let Some(site) = parse_object::<SiteDto>(value) else {
            trace!(index, "skipping malformed site");
            skipped += 1;
            continue;
        };
        list.push(StopRecord::try_new(site.name, site.id)?)?;
    }

    debug!(sites = list.len(), skipped, "decoded sites directory");
    Ok(list)
}

/// Decode a departures board into a fresh list of departures.
pub fn decode_departures(payload: &str) -> Result<RecordList<DepartureRecord>, SlError> {
    decode_departures_into(payload, RecordList::with_capacity(DEPARTURE_LIST_CAPACITY)?)
}

/// Decode a departures board, appending to `list`.
///
/// Like [`decode_sites_into`], a failed append discards the list.
pub fn decode_departures_into(
    payload: &str,
    mut list: RecordList<DepartureRecord>,
) -> Result<RecordList<DepartureRecord>, SlError> {
    let root: Value = serde_json::from_str(payload).map_err(|e| SlError::decode(e.to_string()))?;
    let departures = root
        .get("departures")
        .and_then(Value::as_array)
        .ok_or_else(|| SlError::decode("expected departures array"))?;

    let mut skipped = 0usize;
    for (index, value) in departures.iter().enumerate() {
        let Some(dep) = parse_departure(value) else {
            trace!(index, "skipping malformed departure");
            skipped += 1;
            continue;
        };
        let Some(group) = dep.line.group_of_lines else {
            trace!(
                index,
                designation = dep.line.designation,
                "skipping departure without transport category"
            );
            skipped += 1;
            continue;
        };
        list.push(DepartureRecord::try_new(
            dep.destination,
            dep.expected,
            dep.line.designation,
            Some(group),
        )?)?;
    }

    debug!(departures = list.len(), skipped, "decoded departures");
    Ok(list)
}

/// Deserialize a JSON object element, or `None` if it is not one or lacks
/// a usable field.
fn parse_object<'a, T: Deserialize<'a>>(value: &'a Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    T::deserialize(value).ok()
}

fn parse_departure(value: &Value) -> Option<DepartureDto<'_>> {
    // `line` must itself be an object, not a positional array.
    if !value.get("line").is_some_and(Value::is_object) {
        return None;
    }
    parse_object(value)
}
