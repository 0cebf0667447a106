//! Wire types shared with the portfolio backend
//!
//! Field names follow the backend's camelCase JSON. Every response type is
//! lenient: missing fields fall back to their defaults so that a partially
//! filled resource still deserializes.

use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Identity of the signed-in administrator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub username: String,
}

impl User {
    /// Create a user from a username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Name shown in the admin console
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            "Admin"
        } else {
            &self.username
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Session verification response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub valid: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// Error body returned by the backend on failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
}

/// Project fields sent on create and update
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: String,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
}

impl ProjectInput {
    /// Split a comma separated technology list, dropping blank entries
    pub fn parse_technologies(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tech| !tech.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&Project> for ProjectInput {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            image_url: project.image_url.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            github_url: project.github_url.clone().unwrap_or_default(),
            featured: project.featured,
        }
    }
}

/// Site settings: branding, contact details and social links
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub logo_name: String,
    pub person_name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub instagram: String,
    pub location: String,
    pub resume_url: String,
}

impl Settings {
    /// Number of non-empty fields
    pub fn configured_count(&self) -> usize {
        [
            &self.logo_name,
            &self.person_name,
            &self.phone,
            &self.email,
            &self.linkedin,
            &self.github,
            &self.twitter,
            &self.instagram,
            &self.location,
            &self.resume_url,
        ]
        .iter()
        .filter(|value| !value.trim().is_empty())
        .count()
    }
}

/// About page content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub summary: String,
    pub education: Education,
    pub experience: Vec<Experience>,
    pub training: Vec<Training>,
    pub skills: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub grade: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Training {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    pub institution: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub id: String,
    pub category: String,
    pub items: String,
}

/// `PATCH /about/summary` body
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryUpdate {
    pub summary: String,
}

/// `PUT /about/skills` body
#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsUpdate {
    pub skills: Vec<SkillCategory>,
}

/// Image upload response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_technologies_are_trimmed_and_blank_entries_dropped() {
        let parsed = ProjectInput::parse_technologies(" Rust, Yew ,, ,reqwest");
        assert_eq!(parsed, vec!["Rust", "Yew", "reqwest"]);
    }

    #[test]
    fn test_project_tolerates_missing_fields() {
        let project: Project = serde_json::from_value(json!({
            "id": "p1",
            "title": "Site",
            "imageUrl": "/uploads/a.png"
        }))
        .unwrap();

        assert_eq!(project.image_url.as_deref(), Some("/uploads/a.png"));
        assert!(project.technologies.is_empty());
        assert!(!project.featured);
    }

    #[test]
    fn test_settings_configured_count_ignores_blank_fields() {
        let settings: Settings = serde_json::from_value(json!({
            "logoName": "M.",
            "email": "me@example.com",
            "github": "  "
        }))
        .unwrap();

        assert_eq!(settings.configured_count(), 2);
    }

    #[test]
    fn test_display_name_falls_back_for_blank_username() {
        assert_eq!(User::default().display_name(), "Admin");
        assert_eq!(User::new("admin").display_name(), "admin");
    }

    #[test]
    fn test_verify_response_without_user() {
        let verify: VerifyResponse = serde_json::from_value(json!({ "valid": false })).unwrap();
        assert!(!verify.valid);
        assert!(verify.user.is_none());
    }
}
