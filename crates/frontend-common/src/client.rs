//! Client configuration and initialization

use crate::auth::{AppSession, AuthGateway, SessionManager};
use crate::config::ApiConfig;
use crate::storage::LocalSessionStore;
pub use folio_http::ClientError;
use folio_http::ApiClient;
use std::rc::Rc;

/// Build the API client used by the application
///
/// The client reads the bearer credential from localStorage on every request.
pub fn create_api_client() -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .base_url(ApiConfig::api_base_url())
        .uploads_base_url(ApiConfig::uploads_base_url())
        .store(Rc::new(LocalSessionStore::default()))
        .build()
}

/// Build the API client and the session manager driving it
///
/// Both share one credential store, so a credential saved by the manager is
/// sent by the client on the next request.
pub fn create_session() -> Result<(ApiClient, Rc<AppSession>), ClientError> {
    let client = create_api_client()?;
    let store = client.store().clone();
    let gateway: Rc<dyn AuthGateway> = Rc::new(client.clone());
    Ok((client, Rc::new(SessionManager::new(gateway, store))))
}
