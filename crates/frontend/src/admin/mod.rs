//! Admin console views

mod about;
mod dashboard;
mod layout;
mod projects;
mod settings;

pub use about::AboutEditor;
pub use dashboard::Dashboard;
pub use layout::AdminLayout;
pub use projects::ProjectsEditor;
pub use settings::SettingsEditor;

use folio_http::ClientError;

/// Which entry a form is editing
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Editing {
    #[default]
    New,
    Existing(String),
}

/// Backend reason for a failed admin action, or a fallback naming the action
fn failure_message(error: &ClientError, fallback: &str) -> String {
    error
        .backend_message()
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_backend_reason() {
        let error = ClientError::BadRequest(r#"{"error":"Title taken"}"#.into());
        assert_eq!(failure_message(&error, "Failed to save project"), "Title taken");

        let error = ClientError::NotFound("gone".into());
        assert_eq!(
            failure_message(&error, "Failed to save project"),
            "Failed to save project"
        );
    }
}
