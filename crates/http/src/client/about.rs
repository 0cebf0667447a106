//! About page client methods

use super::{ApiClient, ClientError};
use crate::types::{
    About, Education, Experience, SkillCategory, SkillsUpdate, SummaryUpdate, Training,
};
use reqwest::Method;

impl ApiClient {
    /// Get the full about page content
    pub async fn get_about(&self) -> Result<About, ClientError> {
        let request = self.request(Method::GET, "/about");
        self.execute(request).await
    }

    /// Replace the full about page content
    pub async fn update_about(&self, about: &About) -> Result<(), ClientError> {
        let request = self.request(Method::PUT, "/about").json(about);
        self.execute_unit(request).await
    }

    pub async fn update_summary(&self, summary: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::PATCH, "/about/summary")
            .json(&SummaryUpdate {
                summary: summary.to_string(),
            });
        self.execute_unit(request).await
    }

    pub async fn update_education(&self, education: &Education) -> Result<(), ClientError> {
        let request = self.request(Method::PUT, "/about/education").json(education);
        self.execute_unit(request).await
    }

    pub async fn add_experience(&self, experience: &Experience) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/about/experience").json(experience);
        self.execute_unit(request).await
    }

    pub async fn update_experience(
        &self,
        id: &str,
        experience: &Experience,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::PUT, &format!("/about/experience/{id}"))
            .json(experience);
        self.execute_unit(request).await
    }

    pub async fn delete_experience(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/about/experience/{id}"));
        self.execute_unit(request).await
    }

    pub async fn add_training(&self, training: &Training) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/about/training").json(training);
        self.execute_unit(request).await
    }

    pub async fn update_training(
        &self,
        id: &str,
        training: &Training,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::PUT, &format!("/about/training/{id}"))
            .json(training);
        self.execute_unit(request).await
    }

    pub async fn delete_training(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/about/training/{id}"));
        self.execute_unit(request).await
    }

    /// Replace the skill categories
    pub async fn update_skills(&self, skills: &[SkillCategory]) -> Result<(), ClientError> {
        let request = self
            .request(Method::PUT, "/about/skills")
            .json(&SkillsUpdate {
                skills: skills.to_vec(),
            });
        self.execute_unit(request).await
    }
}
