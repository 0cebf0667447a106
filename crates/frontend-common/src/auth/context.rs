//! Session context and provider

use super::session::{AuthGateway, SessionManager, SessionState};
use crate::config::AuthConfig;
use folio_http::ApiClient;
use folio_http::types::User;
use gloo::timers::callback::Interval;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Session manager used by the application
pub type AppSession = SessionManager<Rc<dyn AuthGateway>>;

/// Value handed to every component under [`AuthProvider`]
#[derive(Clone)]
pub struct AuthContext {
    session: Rc<AppSession>,
    client: ApiClient,
    state: SessionState,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.state == other.state
    }
}

impl AuthContext {
    /// Session state as of the last render
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    /// Shared session manager, for starting login from a view
    pub fn session(&self) -> Rc<AppSession> {
        self.session.clone()
    }

    /// API client carrying the session credential
    pub fn client(&self) -> ApiClient {
        self.client.clone()
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}

/// Auth provider props
///
/// `client` must share its session store with `session` so requests carry
/// the credential the manager stored.
#[derive(Properties)]
pub struct AuthProviderProps {
    pub session: Rc<AppSession>,
    pub client: ApiClient,
    pub children: Children,
}

impl PartialEq for AuthProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(self.client.store(), other.client.store())
            && self.children == other.children
    }
}

/// Publishes the session state to the component tree
///
/// Verifies the stored credential once on first render and re-renders the
/// subtree on every transition of the session manager. While a session is
/// authenticated it is re-verified every
/// [`AuthConfig::REVALIDATE_INTERVAL_MS`].
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_state({
        let session = props.session.clone();
        move || session.state()
    });

    // Follow the manager's transitions, then resolve the initial state
    {
        let session = props.session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut updates = session.subscribe();
            state.set(updates.borrow_and_update().clone());

            let active = Rc::new(Cell::new(true));
            {
                let active = active.clone();
                spawn_local(async move {
                    while updates.changed().await.is_ok() && active.get() {
                        let next = updates.borrow_and_update().clone();
                        state.set(next);
                    }
                });
            }

            spawn_local(async move {
                session.mount().await;
            });

            move || active.set(false)
        });
    }

    // Periodic revalidation while signed in
    {
        let session = props.session.clone();
        use_effect_with(state.is_authenticated(), move |authenticated| {
            let interval = authenticated.then(|| {
                Interval::new(AuthConfig::REVALIDATE_INTERVAL_MS, move || {
                    let session = session.clone();
                    spawn_local(async move {
                        session.revalidate().await;
                    });
                })
            });

            move || drop(interval)
        });
    }

    let context = AuthContext {
        session: props.session.clone(),
        client: props.client.clone(),
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to get the current session state
#[hook]
pub fn use_session_state() -> SessionState {
    let auth = use_auth();
    auth.state().clone()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.state().is_authenticated()
}
