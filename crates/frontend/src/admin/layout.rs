//! Admin console frame

use folio_frontend_common::{use_auth, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    /// Route highlighted in the sidebar
    pub active: Route,
    pub children: Children,
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let display_name = auth
        .user()
        .map_or("Admin", |user| user.display_name())
        .to_string();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <aside class="w-64 bg-gray-900 text-gray-100 flex flex-col">
                <div class="p-6 border-b border-gray-800">
                    <h2 class="text-lg font-bold">{"Portfolio Admin"}</h2>
                    <p class="text-sm text-gray-400">{format!("Welcome, {display_name}")}</p>
                </div>
                <nav class="flex-1 p-4 space-y-1">
                    { for Route::ADMIN_NAV.iter().map(|(route, label)| {
                        let class = if *route == props.active {
                            "block px-3 py-2 rounded-md bg-gray-800 text-white"
                        } else {
                            "block px-3 py-2 rounded-md text-gray-300 hover:bg-gray-800"
                        };
                        html! {
                            <Link<Route> to={route.clone()} classes={class}>{*label}</Link<Route>>
                        }
                    }) }
                </nav>
                <div class="p-4 border-t border-gray-800">
                    <button onclick={on_logout} class="w-full px-3 py-2 text-left rounded-md text-gray-300 hover:bg-gray-800">
                        {"Logout"}
                    </button>
                </div>
            </aside>
            <main class="flex-1 p-8 overflow-y-auto">
                {props.children.clone()}
            </main>
        </div>
    }
}
