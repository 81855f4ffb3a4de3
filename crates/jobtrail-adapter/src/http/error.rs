/*
[INPUT]:  Error sources (HTTP transport, API responses, gateway, session I/O)
[OUTPUT]: Structured error types with user-facing message extraction
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the jobtrail adapter
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response was produced
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response; `message` is the server-supplied
    /// message when the body carried one
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Persisting or loading the auth session failed
    #[error("Session storage error: {0}")]
    Session(String),

    /// The payment gateway raised an error (user cancellation, SDK failure)
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

impl ApiError {
    /// Create an API error from a status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// The server-supplied message, when the failure carried one.
    ///
    /// Callers use this to surface backend copy ("Email already
    /// registered") ahead of a generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Check if the error came from the payment gateway
    pub fn is_gateway_error(&self) -> bool {
        matches!(self, ApiError::Gateway(_))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::api_error(StatusCode::CONFLICT, "Email already registered");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already registered");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_server_message_extraction() {
        let err = ApiError::api_error(StatusCode::BAD_REQUEST, "Invalid plan");
        assert_eq!(err.server_message(), Some("Invalid plan"));

        let empty = ApiError::api_error(StatusCode::BAD_GATEWAY, "");
        assert_eq!(empty.server_message(), None);

        let gateway = ApiError::Gateway("Payment cancelled by user".to_string());
        assert_eq!(gateway.server_message(), None);
        assert!(gateway.is_gateway_error());
    }
}
