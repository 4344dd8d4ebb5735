//! Query-level errors.
//!
//! Every error ends the current command. None are retried.

use crate::domain::AllocationFailure;
use crate::sl::SlError;

/// Errors from station resolution, search and departure queries.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The API could not be reached, answered non-200, or sent a malformed payload
    #[error("could not retrieve data: {0}")]
    Fetch(SlError),

    /// A record list could not grow while building results
    #[error(transparent)]
    Allocation(#[from] AllocationFailure),

    /// No site in the directory matches the station name
    #[error("no station found for '{token}'")]
    StationNotFound { token: String },

    /// Transport type filter is not one of the known categories
    #[error("invalid transport type '{value}'. Valid types: metro, bus, train, tram")]
    InvalidFilterValue { value: String },
}

impl From<SlError> for QueryError {
    fn from(err: SlError) -> Self {
        match err {
            SlError::Allocation(e) => QueryError::Allocation(e),
            other => QueryError::Fetch(other),
        }
    }
}
