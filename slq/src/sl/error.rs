//! SL API error types.

use crate::domain::AllocationFailure;

/// Errors that can occur when talking to the SL transport API.
#[derive(Debug, thiserror::Error)]
pub enum SlError {
    /// HTTP request failed (network error, timeout, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("HTTP request failed with status {status}")]
    Status { status: u16 },

    /// Response body was not the expected JSON shape
    #[error("failed to parse response: {message}")]
    Decode { message: String },

    /// Storing a decoded record failed
    #[error(transparent)]
    Allocation(#[from] AllocationFailure),
}

impl SlError {
    pub(crate) fn decode(message: impl Into<String>) -> Self {
        SlError::Decode {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SlError::Status { status: 503 };
        assert_eq!(err.to_string(), "HTTP request failed with status 503");

        let err = SlError::decode("expected JSON array");
        assert_eq!(err.to_string(), "failed to parse response: expected JSON array");

        let err = SlError::from(AllocationFailure::new("record list is full"));
        assert_eq!(err.to_string(), "allocation failure: record list is full");
    }
}
