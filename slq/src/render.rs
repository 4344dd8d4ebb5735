//! Plain-text output.
//!
//! Search results are tab-delimited for shell scripting. Departures are shown
//! as a fixed-width table.

use chrono::NaiveDateTime;

use crate::departures::{DepartureBoard, DepartureFilters};
use crate::domain::{DepartureRecord, StopRecord, Wait, clock_label};

/// Message printed when no departure survives filtering.
pub const NO_DEPARTURES: &str = "No departures found";

/// Width of the rule under the table header.
const RULE_WIDTH: usize = 70;

/// One table row, with the time evaluator's labels filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRow<'a> {
    pub wait: Wait,
    pub clock: String,
    pub departure: &'a DepartureRecord,
}

impl<'a> DepartureRow<'a> {
    pub fn new(departure: &'a DepartureRecord, now: NaiveDateTime) -> Self {
        Self {
            wait: Wait::until(&departure.expected, now),
            clock: clock_label(&departure.expected),
            departure,
        }
    }
}

/// `name<TAB>id`, one line per stop.
pub fn render_stops<'a>(stops: impl IntoIterator<Item = &'a StopRecord>) -> String {
    stops
        .into_iter()
        .map(|stop| format!("{}\t{}\n", stop.name, stop.id))
        .collect()
}

/// Title line naming the station and every active filter.
pub fn title(station: &str, filters: &DepartureFilters) -> String {
    let mut title = format!("Departures from {station}");
    if let Some(line) = &filters.line {
        title.push_str(&format!(" (line {line})"));
    }
    if let Some(kind) = filters.transport {
        title.push_str(&format!(" ({kind})"));
    }
    if let Some(destination) = &filters.destination {
        title.push_str(&format!(" (to {})", destination.as_str()));
    }
    title
}

fn header() -> String {
    format!(
        "{:<5} {:<6} {:<6} {:<20} Type",
        "Wait", "Time", "Line", "Destination"
    )
}

fn row_line(row: &DepartureRow<'_>) -> String {
    format!(
        "{:<5} {:<6} {:<6} {:<20} {}",
        row.wait.to_string(),
        row.clock,
        row.departure.line.designation,
        row.departure.destination,
        row.departure.group_label()
    )
}

/// The departures table: title, header, rule, then up to `count` rows.
pub fn render_departures(
    station: &str,
    filters: &DepartureFilters,
    board: &DepartureBoard,
    count: usize,
    now: NaiveDateTime,
) -> String {
    if board.is_empty() {
        return format!("{NO_DEPARTURES}\n");
    }

    let mut lines = vec![
        format!("{}:", title(station, filters)),
        header(),
        "-".repeat(RULE_WIDTH),
    ];
    lines.extend(
        board
            .limited(count)
            .iter()
            .map(|departure| row_line(&DepartureRow::new(departure, now))),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
