use crate::admin::{AboutEditor, AdminLayout, Dashboard, ProjectsEditor, SettingsEditor};
use crate::pages::{
    AboutPage, ContactPage, HomePage, LoginPage, NotFoundPage, ProjectsPage, PublicShell,
    ServicesPage,
};
use folio_frontend_common::auth::AppSession;
use folio_http::ApiClient;
use folio_frontend_common::{AuthProvider, ProtectedRoute, Route};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties)]
pub struct AppProps {
    pub client: ApiClient,
    pub session: Rc<AppSession>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && Rc::ptr_eq(self.client.store(), other.client.store())
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <HashRouter>
            <AuthProvider session={props.session.clone()} client={props.client.clone()}>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </HashRouter>
    }
}

fn switch(route: Route) -> Html {
    let view = match &route {
        Route::Login => return html! { <LoginPage /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::AdminProjects => html! { <ProjectsEditor /> },
        Route::AdminAbout => html! { <AboutEditor /> },
        Route::AdminSettings => html! { <SettingsEditor /> },
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::AdminNotFound | Route::NotFound => html! { <NotFoundPage /> },
    };

    if route.requires_auth() {
        admin(route, view)
    } else {
        public(view)
    }
}

fn admin(active: Route, view: Html) -> Html {
    html! {
        <ProtectedRoute>
            <AdminLayout {active}>{view}</AdminLayout>
        </ProtectedRoute>
    }
}

fn public(view: Html) -> Html {
    html! { <PublicShell>{view}</PublicShell> }
}
