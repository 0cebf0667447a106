//! Client error types

use crate::types::ErrorBody;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Upload rejected before it was sent
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of a backend failure, if the request reached the backend
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend rejected the bearer credential
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    /// Message carried in a backend `{"error": "..."}` body
    ///
    /// Returns `None` for transport failures and for bodies that are not the
    /// backend's error shape.
    pub fn backend_message(&self) -> Option<String> {
        let body = match self {
            Self::BadRequest(body)
            | Self::AuthenticationFailed(body)
            | Self::Forbidden(body)
            | Self::NotFound(body)
            | Self::ServerError { message: body, .. } => body,
            Self::InvalidUpload(message) => return Some(message.clone()),
            _ => return None,
        };

        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|parsed| parsed.error)
            .filter(|message| !message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, String::new()),
            ClientError::NotFound(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_backend_message_extracts_error_field() {
        let error = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Invalid credentials"}"#.to_string(),
        );
        assert_eq!(error.backend_message().as_deref(), Some("Invalid credentials"));
        assert!(error.is_auth_expired());
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_backend_message_ignores_plain_bodies() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "oops".into());
        assert_eq!(error.backend_message(), None);

        let error = ClientError::from_status(StatusCode::BAD_REQUEST, r#"{"error":""}"#.into());
        assert_eq!(error.backend_message(), None);
    }
}
