//! Site settings form

use crate::forms::{update_field, INPUT_CLASS, PRIMARY_BUTTON};
use folio_frontend_common::{use_auth, Notice, NoticeKind, Spinner};
use folio_http::types::Settings;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type Setter = fn(&mut Settings, String);

/// Form rows: label, current value and how to write it back
fn fields(settings: &Settings) -> [(&'static str, String, Setter); 10] {
    [
        ("Logo name", settings.logo_name.clone(), |s, v| s.logo_name = v),
        ("Full name", settings.person_name.clone(), |s, v| s.person_name = v),
        ("Email", settings.email.clone(), |s, v| s.email = v),
        ("Phone", settings.phone.clone(), |s, v| s.phone = v),
        ("Location", settings.location.clone(), |s, v| s.location = v),
        ("LinkedIn", settings.linkedin.clone(), |s, v| s.linkedin = v),
        ("GitHub", settings.github.clone(), |s, v| s.github = v),
        ("Twitter", settings.twitter.clone(), |s, v| s.twitter = v),
        ("Instagram", settings.instagram.clone(), |s, v| s.instagram = v),
        ("Resume URL", settings.resume_url.clone(), |s, v| s.resume_url = v),
    ]
}

#[function_component(SettingsEditor)]
pub fn settings_editor() -> Html {
    let auth = use_auth();
    let settings = use_state(|| None::<Settings>);
    let saving = use_state(|| false);
    let status = use_state(|| None::<(NoticeKind, String)>);

    {
        let client = auth.client();
        let settings = settings.clone();
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_settings().await {
                    Ok(loaded) => settings.set(Some(loaded)),
                    Err(error) => {
                        tracing::error!(%error, "failed to fetch settings");
                        settings.set(Some(Settings::default()));
                        status.set(Some((NoticeKind::Error, "Failed to fetch settings".into())));
                    }
                }
            });
        });
    }

    let Some(current) = (*settings).clone() else {
        return html! { <Spinner /> };
    };

    let on_submit = {
        let client = auth.client();
        let body = current.clone();
        let saving = saving.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let body = body.clone();
            let saving = saving.clone();
            let status = status.clone();
            saving.set(true);
            spawn_local(async move {
                match client.update_settings(&body).await {
                    Ok(()) => status.set(Some((
                        NoticeKind::Success,
                        "Settings saved successfully!".into(),
                    ))),
                    Err(error) => {
                        tracing::error!(%error, "failed to save settings");
                        status.set(Some((NoticeKind::Error, "Failed to save settings".into())));
                    }
                }
                saving.set(false);
            });
        })
    };

    let (kind, message) = match &*status {
        Some((kind, message)) => (*kind, Some(message.clone())),
        None => (NoticeKind::Error, None),
    };

    html! {
        <div class="space-y-6 max-w-2xl">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{"Settings"}</h1>
                <p class="text-gray-600">{"Branding, contact details and social links"}</p>
            </div>

            <Notice {kind} {message} />

            <form onsubmit={on_submit} class="p-6 bg-white rounded-lg shadow space-y-4">
                { for fields(&current).into_iter().map(|(label, value, apply)| html! {
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
                        <input
                            class={INPUT_CLASS}
                            value={value}
                            oninput={update_field(&settings, move |loaded: &mut Option<Settings>, v| {
                                if let Some(loaded) = loaded {
                                    apply(loaded, v);
                                }
                            })}
                        />
                    </div>
                }) }
                <button type="submit" class={PRIMARY_BUTTON} disabled={*saving}>
                    {if *saving { "Saving..." } else { "Save Settings" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_setting_has_a_field() {
        let mut settings = Settings::default();
        for (_, _, apply) in fields(&Settings::default()) {
            apply(&mut settings, "x".into());
        }
        assert_eq!(settings.configured_count(), 10);
    }

    #[test]
    fn test_fields_show_current_values() {
        let settings = Settings {
            email: "me@example.com".into(),
            ..Settings::default()
        };
        let email = fields(&settings)
            .into_iter()
            .find(|(label, _, _)| *label == "Email")
            .map(|(_, value, _)| value);
        assert_eq!(email.as_deref(), Some("me@example.com"));
    }
}
