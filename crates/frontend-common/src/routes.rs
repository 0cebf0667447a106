//! Route table

use yew_router::prelude::*;

/// Every navigable path of the site
///
/// Public pages and the admin login entry point are open to everyone. Every
/// other path under `/admin/` requires an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[at("/services")]
    Services,
    #[at("/admin")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/projects")]
    AdminProjects,
    #[at("/admin/about")]
    AdminAbout,
    #[at("/admin/settings")]
    AdminSettings,
    #[at("/admin/*")]
    AdminNotFound,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether rendering this route needs an authenticated session
    pub const fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::AdminProjects
                | Self::AdminAbout
                | Self::AdminSettings
                | Self::AdminNotFound
        )
    }

    /// Entries of the admin sidebar, in display order
    pub const ADMIN_NAV: [(Self, &'static str); 4] = [
        (Self::Dashboard, "Dashboard"),
        (Self::AdminProjects, "Projects"),
        (Self::AdminAbout, "About"),
        (Self::AdminSettings, "Settings"),
    ];

    /// Entries of the public header, in display order
    pub const PUBLIC_NAV: [(Self, &'static str); 4] = [
        (Self::Home, "Home"),
        (Self::About, "About"),
        (Self::Projects, "Projects"),
        (Self::Contact, "Contact"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_are_open() {
        for route in [
            Route::Home,
            Route::About,
            Route::Projects,
            Route::Contact,
            Route::Services,
            Route::Login,
            Route::NotFound,
        ] {
            assert!(!route.requires_auth(), "{route:?} should be public");
        }
    }

    #[test]
    fn test_admin_routes_are_protected() {
        for (route, _) in Route::ADMIN_NAV {
            assert!(route.requires_auth(), "{route:?} should be protected");
        }
        assert!(Route::AdminNotFound.requires_auth());
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Login.to_path(), "/admin");
        assert_eq!(Route::Dashboard.to_path(), "/admin/dashboard");
        assert_eq!(Route::AdminSettings.to_path(), "/admin/settings");
    }

    #[test]
    fn test_recognize_admin_paths() {
        assert_eq!(Route::recognize("/admin"), Some(Route::Login));
        assert_eq!(Route::recognize("/admin/about"), Some(Route::AdminAbout));
        assert_eq!(
            Route::recognize("/admin/unknown"),
            Some(Route::AdminNotFound)
        );
    }
}
