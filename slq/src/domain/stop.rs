//! Transit site records.

use super::error::{AllocationFailure, try_copy};

/// One transit site from the SL directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    pub name: String,
    pub id: u32,
}

impl StopRecord {
    /// Build a record, copying the name into storage owned by the record.
    pub fn try_new(name: &str, id: u32) -> Result<Self, AllocationFailure> {
        Ok(Self {
            name: try_copy(name)?,
            id,
        })
    }
}
