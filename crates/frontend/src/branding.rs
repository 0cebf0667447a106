//! Site branding shown in the public header

use folio_frontend_common::{use_auth, SiteConfig};
use folio_http::types::Settings;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Branding {
    pub logo_name: String,
    pub person_name: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            logo_name: SiteConfig::DEFAULT_LOGO_NAME.to_string(),
            person_name: SiteConfig::DEFAULT_PERSON_NAME.to_string(),
        }
    }
}

impl Branding {
    /// Take branding from the site settings, keeping defaults for blank fields
    pub fn from_settings(settings: &Settings) -> Self {
        let fallback = Self::default();
        Self {
            logo_name: non_blank(&settings.logo_name).unwrap_or(fallback.logo_name),
            person_name: non_blank(&settings.person_name).unwrap_or(fallback.person_name),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Branding from `/settings`, fetched once per mount
#[hook]
pub fn use_branding() -> Branding {
    let auth = use_auth();
    let branding = use_state(Branding::default);

    {
        let branding = branding.clone();
        use_effect_with((), move |_| {
            let client = auth.client();
            spawn_local(async move {
                match client.get_settings().await {
                    Ok(settings) => branding.set(Branding::from_settings(&settings)),
                    Err(error) => tracing::debug!(%error, "using default branding"),
                }
            });
        });
    }

    (*branding).clone()
}
