//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{LoginRequest, LoginResponse, VerifyResponse};

impl ApiClient {
    /// Exchange username and password for a bearer credential
    ///
    /// The returned credential is not persisted here; storing it is the
    /// caller's decision.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            });
        self.execute(req).await
    }

    /// Ask the backend whether the stored credential is still valid
    pub async fn verify_session(&self) -> Result<VerifyResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, "/auth/verify");
        self.execute(req).await
    }
}
