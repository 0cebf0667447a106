//! Frontend configuration

use tracing::Level;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage slot holding the bearer credential
    pub const TOKEN_KEY: &'static str = "adminToken";

    /// Re-verification interval for an authenticated session in milliseconds
    pub const REVALIDATE_INTERVAL_MS: u32 = 300_000; // 5 minutes
}

/// Backend location, fixed at build time
pub struct ApiConfig;

impl ApiConfig {
    const DEFAULT_API_URL: &'static str = "http://localhost:3000/api";
    const DEFAULT_UPLOADS_URL: &'static str = "http://localhost:3000";

    /// Base URL of the REST API (`FOLIO_API_URL`)
    pub fn api_base_url() -> &'static str {
        option_env!("FOLIO_API_URL").unwrap_or(Self::DEFAULT_API_URL)
    }

    /// Host serving relative `/uploads/` paths (`FOLIO_UPLOADS_URL`)
    pub fn uploads_base_url() -> &'static str {
        option_env!("FOLIO_UPLOADS_URL").unwrap_or(Self::DEFAULT_UPLOADS_URL)
    }
}

/// Branding used until the site settings say otherwise
pub struct SiteConfig;

impl SiteConfig {
    pub const DEFAULT_LOGO_NAME: &'static str = "Portfolio";
    pub const DEFAULT_PERSON_NAME: &'static str = "Portfolio Owner";
}

/// Application-wide settings
pub struct AppConfig;

impl AppConfig {
    /// Most verbose level written to the browser console
    pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
}
