//! Browser-backed credential persistence

use crate::config::AuthConfig;
use folio_http::client::store::{SessionStore, StoreError};
use tracing::warn;
use web_sys::Storage;

/// Session store backed by `window.localStorage`
///
/// The credential survives reloads within the browser profile. When storage
/// is unavailable (private mode, disabled by policy) reads report no
/// credential and writes fail with a [`StoreError`].
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: &'static str,
}

impl Default for LocalSessionStore {
    fn default() -> Self {
        Self::new(AuthConfig::TOKEN_KEY)
    }
}

impl LocalSessionStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn save(&self, credential: &str) -> Result<(), StoreError> {
        let storage = get_local_storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(self.key, credential).map_err(|error| {
            warn!(key = self.key, "failed to persist credential");
            StoreError::Rejected(format!("{error:?}"))
        })
    }

    fn read(&self) -> Option<String> {
        get_local_storage()?.get_item(self.key).ok().flatten()
    }

    fn clear(&self) -> Result<(), StoreError> {
        // nothing can be stored without a backend
        let Some(storage) = get_local_storage() else {
            return Ok(());
        };
        storage.remove_item(self.key).map_err(|error| {
            warn!(key = self.key, "failed to remove credential");
            StoreError::Rejected(format!("{error:?}"))
        })
    }
}
