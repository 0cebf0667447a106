//! Session handling, route protection and shared components for the Folio
//! frontend

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod guard;
pub mod logging;
pub mod routes;
pub mod storage;

pub use auth::{use_auth, AuthContext, AuthProvider, SessionState};
pub use client::{create_api_client, create_session};
pub use components::{Notice, NoticeKind, Spinner};
pub use config::{ApiConfig, AppConfig, AuthConfig, SiteConfig};
pub use guard::{decide, GuardDecision, ProtectedRoute};
pub use routes::Route;
pub use storage::LocalSessionStore;
