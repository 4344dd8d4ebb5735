//! Departure records.

use super::error::{AllocationFailure, try_copy};

/// The line a departure runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Line number or label, e.g. "14" or "28s".
    pub designation: String,
    /// Free-text category from the API, e.g. "Tunnelbanans röda linje".
    pub transport_group: Option<String>,
}

/// One upcoming departure from a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRecord {
    pub destination: String,
    /// Expected time as sent by the API (`YYYY-MM-DDTHH:MM:SS`, local time).
    pub expected: String,
    pub line: LineRecord,
}

impl DepartureRecord {
    /// Build a record, copying every string into storage owned by the record.
    ///
    /// If any copy fails the copies already made are released and no record
    /// is produced.
    pub fn try_new(
        destination: &str,
        expected: &str,
        designation: &str,
        transport_group: Option<&str>,
    ) -> Result<Self, AllocationFailure> {
        let destination = try_copy(destination)?;
        let expected = try_copy(expected)?;
        let designation = try_copy(designation)?;
        let transport_group = transport_group.map(try_copy).transpose()?;

        Ok(Self {
            destination,
            expected,
            line: LineRecord {
                designation,
                transport_group,
            },
        })
    }

    /// The transport category, or "Unknown" if the API did not send one.
    pub fn group_label(&self) -> &str {
        self.line.transport_group.as_deref().unwrap_or("Unknown")
    }
}
