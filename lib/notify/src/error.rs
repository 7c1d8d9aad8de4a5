//! Error types for the notify crate.

use std::fmt;

/// Errors from the HTTP transport layer.
///
/// These never escape the dispatcher; they are folded into the status
/// string it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or failed in flight.
    RequestFailed { reason: String },
    /// The response body could not be read.
    BodyReadFailed { reason: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { reason } => {
                write!(f, "request failed: {reason}")
            }
            Self::BodyReadFailed { reason } => {
                write!(f, "failed to read response body: {reason}")
            }
        }
    }
}

impl std::error::Error for TransportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = TransportError::RequestFailed {
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("request failed"));
        assert!(err.to_string().contains("connection refused"));
    }
}
