//! Client error types

use thiserror::Error;

use crate::bookings::BookingAction;

/// Backend client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or expired bearer token
    #[error("Authentication required")]
    Unauthorized,

    /// Any other non-2xx response
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend refused a requested booking status change
    #[error("Backend refused to {action} booking {booking_id} ({status}): {reason}")]
    TransitionRejected {
        booking_id: i64,
        action: BookingAction,
        status: u16,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the persisted session failed
    #[error("Session store error: {0}")]
    Session(#[from] std::io::Error),
}

impl ClientError {
    /// Static message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Http(_) => "Could not reach the server. Please try again.",
            ClientError::Unauthorized => "Please log in to continue.",
            ClientError::Status { .. } => "The request failed. Please try again.",
            ClientError::TransitionRejected { .. } => {
                "This booking can no longer be updated. Please refresh and try again."
            }
            ClientError::Serialization(_) => "Received an unexpected response from the server.",
            ClientError::Session(_) => "Could not access the saved session.",
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::TransitionRejected { .. })
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_user_message() {
        let err = ClientError::TransitionRejected {
            booking_id: 42,
            action: BookingAction::Complete,
            status: 500,
            reason: "Cannot complete booking before end date".to_string(),
        };
        assert!(err.to_string().contains("complete booking 42"));
        assert!(err.to_string().contains("before end date"));
        assert!(err.is_rejection());
        assert!(err.user_message().contains("no longer be updated"));

        let err = ClientError::Status {
            status: 404,
            body: "missing".to_string(),
        };
        assert!(!err.is_rejection());
        assert_eq!(err.user_message(), "The request failed. Please try again.");
    }
}
