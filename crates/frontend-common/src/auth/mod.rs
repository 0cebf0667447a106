//! Authentication module

pub mod context;
pub mod error;
pub mod session;

// Re-export commonly used items
pub use context::{
    use_auth, use_is_authenticated, use_session_state, AppSession, AuthContext, AuthProvider,
};
pub use error::AuthError;
pub use session::{AuthGateway, SessionManager, SessionState};
