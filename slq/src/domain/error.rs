//! Domain error types.
//!
//! Record construction and list growth are fallible so that a failed
//! allocation never leaves a half-built record or a corrupted list behind.

/// Error returned when a record list or an owned string cannot reserve memory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("allocation failure: {reason}")]
pub struct AllocationFailure {
    reason: &'static str,
}

impl AllocationFailure {
    pub(crate) fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// What could not be allocated.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Copy a string into freshly reserved storage.
///
/// Unlike `to_owned`, this reports allocation failure instead of aborting.
pub(crate) fn try_copy(s: &str) -> Result<String, AllocationFailure> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|_| AllocationFailure::new("could not copy string"))?;
    owned.push_str(s);
    Ok(owned)
}
