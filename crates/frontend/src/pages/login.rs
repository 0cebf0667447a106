//! Admin login entry point

use crate::forms::{bind_input, INPUT_CLASS, PRIMARY_BUTTON};
use folio_frontend_common::guard::login_redirect;
use folio_frontend_common::{use_auth, Notice, Route};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    // Signed-in visitors go straight to the dashboard
    {
        let navigator = navigator.clone();
        use_effect_with(login_redirect(auth.state()), move |target| {
            if let (Some(target), Some(navigator)) = (target, navigator) {
                navigator.replace(target);
            }
        });
    }

    let on_submit = {
        let session = auth.session();
        let username = username.clone();
        let password = password.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            let username = (*username).clone();
            let password = (*password).clone();
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();

            loading.set(true);
            error.set(None);
            spawn_local(async move {
                match session.login(&username, &password).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::Dashboard);
                        }
                    }
                    Err(e) => error.set(Some(e.user_message())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-gray-900">{"Admin Login"}</h1>
                    <p class="mt-2 text-gray-600">{"Sign in to manage your portfolio"}</p>
                </div>

                <Notice message={(*error).clone()} />

                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="username" class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                        <input
                            id="username"
                            type="text"
                            class={INPUT_CLASS}
                            placeholder="Enter username"
                            autocomplete="username"
                            value={(*username).clone()}
                            oninput={bind_input(&username)}
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            class={INPUT_CLASS}
                            placeholder="Enter password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <button type="submit" class={classes!(PRIMARY_BUTTON, "w-full")} disabled={*loading}>
                        {if *loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
