//! Contact submission error types.

use std::collections::HashMap;

/// Errors that can occur while submitting a contact message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Request timed out, was aborted, or never reached the server
    #[error("Network error: {message}")]
    Network { message: String, timed_out: bool },

    /// Server answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Server rejected individual fields
    #[error("Validation failed: {message}")]
    ServerValidation {
        message: String,
        errors: HashMap<String, Vec<String>>,
    },

    /// Server reported failure without field details
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// Anything else
    #[error("Failed to send message: {0}")]
    Other(String),
}

impl ContactError {
    /// Return whether the submission layer should retry after this error.
    /// Only server-side failures qualify.
    ///
    pub fn is_retryable(&self) -> bool {
        matches!(self, ContactError::Api { status, .. } if *status >= 500)
    }

    /// Return the text shown in the error banner.
    ///
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Network { timed_out: true, .. } => {
                "The request timed out. Please check your connection and try again.".to_string()
            }
            ContactError::Network { .. } => {
                "Unable to reach the server. Please check your connection and try again."
                    .to_string()
            }
            ContactError::Api { message, .. } => message.clone(),
            ContactError::ServerValidation { message, .. } => message.clone(),
            ContactError::Rejected(message) => message.clone(),
            ContactError::Other(_) => "Failed to send message. Please try again later.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_server_errors_are_retryable() {
        assert!(ContactError::Api {
            status: 503,
            message: "Unavailable".to_string()
        }
        .is_retryable());
        assert!(ContactError::Api {
            status: 500,
            message: "Boom".to_string()
        }
        .is_retryable());
        assert!(!ContactError::Api {
            status: 400,
            message: "Bad".to_string()
        }
        .is_retryable());
        assert!(!ContactError::Network {
            message: "timeout".to_string(),
            timed_out: true
        }
        .is_retryable());
        assert!(!ContactError::ServerValidation {
            message: "Invalid".to_string(),
            errors: HashMap::new()
        }
        .is_retryable());
    }

    #[test]
    fn test_contact_error_display() {
        let error = ContactError::Api {
            status: 404,
            message: "HTTP 404".to_string(),
        };
        assert!(error.to_string().contains("404"));

        let error = ContactError::Other("socket closed".to_string());
        assert!(error.to_string().contains("socket closed"));
        assert!(!error.user_message().contains("socket closed"));
    }

    #[test]
    fn test_timeout_message() {
        let error = ContactError::Network {
            message: "deadline elapsed".to_string(),
            timed_out: true,
        };
        assert!(error.user_message().contains("timed out"));
    }
}
