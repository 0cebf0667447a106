//! Errors surfaced by the session manager

use folio_http::ClientError;
use folio_http::client::store::StoreError;
use thiserror::Error;

/// Shown when the backend gives no usable reason for a failed login
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

/// Shown when the browser refuses to keep the credential
pub const STORAGE_FAILED_MESSAGE: &str =
    "Could not save your session in this browser. Check that site storage is allowed.";

/// Login failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password left blank
    #[error("Please fill in all fields")]
    MissingFields,

    /// The backend refused the login, or could not be reached
    #[error("Login rejected: {}", message.as_deref().unwrap_or(LOGIN_FAILED_MESSAGE))]
    LoginRejected {
        message: Option<String>,
        #[source]
        source: ClientError,
    },

    /// The backend accepted the login but the credential could not be stored
    #[error("Credential not stored: {0}")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// Text shown to the user on the login page
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields => self.to_string(),
            Self::LoginRejected { message, .. } => message
                .clone()
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            Self::Storage(_) => STORAGE_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<ClientError> for AuthError {
    fn from(source: ClientError) -> Self {
        Self::LoginRejected {
            message: source.backend_message(),
            source,
        }
    }
}
