//! Project API client methods

use super::{ApiClient, ClientError};
use crate::types::{Project, ProjectInput};
use reqwest::Method;

impl ApiClient {
    /// List all projects
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let request = self.request(Method::GET, "/projects");
        self.execute(request).await
    }

    /// Get a single project
    pub async fn get_project(&self, id: &str) -> Result<Project, ClientError> {
        let request = self.request(Method::GET, &format!("/projects/{id}"));
        self.execute(request).await
    }

    /// Create a project
    pub async fn create_project(&self, project: &ProjectInput) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/projects").json(project);
        self.execute_unit(request).await
    }

    /// Replace a project
    pub async fn update_project(
        &self,
        id: &str,
        project: &ProjectInput,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::PUT, &format!("/projects/{id}"))
            .json(project);
        self.execute_unit(request).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/projects/{id}"));
        self.execute_unit(request).await
    }
}
