mod admin;
mod app;
mod branding;
mod forms;
mod pages;

use app::{App, AppProps};
use folio_frontend_common::{create_session, logging, AppConfig};

fn main() {
    logging::init(AppConfig::LOG_LEVEL);

    match create_session() {
        Ok((client, session)) => {
            yew::Renderer::<App>::with_props(AppProps { client, session }).render();
        }
        Err(error) => tracing::error!(%error, "failed to build the API client"),
    }
}
