//! Route protection

use crate::auth::{use_session_state, SessionState};
use crate::components::Spinner;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// What to render for a protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a placeholder, do not navigate
    Pending,
    Allow,
    Redirect { to: Route, replace: bool },
}

/// Decide how a protected view reacts to the session state
pub fn decide(state: &SessionState) -> GuardDecision {
    match state {
        SessionState::Unresolved => GuardDecision::Pending,
        SessionState::Authenticated { .. } => GuardDecision::Allow,
        SessionState::Anonymous => GuardDecision::Redirect {
            to: Route::Login,
            replace: true,
        },
    }
}

/// Where the login page sends a visitor who is already signed in
pub fn login_redirect(state: &SessionState) -> Option<Route> {
    state.is_authenticated().then_some(Route::Dashboard)
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children only for an authenticated session
///
/// Shows a spinner while the session is unresolved and replaces the current
/// history entry with the login page once it resolves to anonymous.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let state = use_session_state();
    let navigator = use_navigator();
    let decision = decide(&state);

    use_effect_with(decision.clone(), move |decision| {
        if let (GuardDecision::Redirect { to, replace }, Some(navigator)) = (decision, navigator) {
            if *replace {
                navigator.replace(to);
            } else {
                navigator.push(to);
            }
        }
    });

    match decision {
        GuardDecision::Pending => html! {
            <Spinner text={"Checking session..."} full_screen=true />
        },
        GuardDecision::Allow => html! { <>{props.children.clone()}</> },
        GuardDecision::Redirect { .. } => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_http::types::User;

    fn authenticated() -> SessionState {
        SessionState::Authenticated {
            user: User::new("admin"),
        }
    }

    #[test]
    fn test_unresolved_neither_renders_nor_redirects() {
        assert_eq!(decide(&SessionState::Unresolved), GuardDecision::Pending);
    }

    #[test]
    fn test_authenticated_is_allowed() {
        assert_eq!(decide(&authenticated()), GuardDecision::Allow);
    }

    #[test]
    fn test_anonymous_is_sent_to_login_replacing_history() {
        assert_eq!(
            decide(&SessionState::Anonymous),
            GuardDecision::Redirect {
                to: Route::Login,
                replace: true
            }
        );
    }

    #[test]
    fn test_login_redirect_only_when_signed_in() {
        assert_eq!(login_redirect(&authenticated()), Some(Route::Dashboard));
        assert_eq!(login_redirect(&SessionState::Anonymous), None);
        assert_eq!(login_redirect(&SessionState::Unresolved), None);
    }
}
