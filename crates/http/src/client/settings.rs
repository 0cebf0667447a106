//! Site settings client methods

use crate::client::{ApiClient, ClientError};
use crate::types::Settings;
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// Get the site settings
    pub async fn get_settings(&self) -> Result<Settings, ClientError> {
        let request = self.request(Method::GET, "/settings");
        self.execute(request).await
    }

    /// Replace the site settings
    pub async fn update_settings(&self, settings: &Settings) -> Result<(), ClientError> {
        let request = self.request(Method::PUT, "/settings").json(settings);
        self.execute_unit(request).await
    }

    /// Update a subset of the site settings
    pub async fn patch_settings(&self, changes: &Value) -> Result<(), ClientError> {
        let request = self.request(Method::PATCH, "/settings").json(changes);
        self.execute_unit(request).await
    }
}
