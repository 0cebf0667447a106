//! Browser tests for the localStorage credential store

#![cfg(target_arch = "wasm32")]

use folio_frontend_common::config::AuthConfig;
use folio_frontend_common::storage::LocalSessionStore;
use folio_http::client::store::SessionStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_credential_round_trips_through_local_storage() {
    let store = LocalSessionStore::new("folio-test-token");
    store.clear().unwrap();
    assert_eq!(store.read(), None);

    store.save("tok123").unwrap();
    assert_eq!(store.read().as_deref(), Some("tok123"));

    store.save("abc").unwrap();
    assert_eq!(store.read().as_deref(), Some("abc"));

    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.read(), None);
}

#[wasm_bindgen_test]
fn test_default_store_uses_admin_token_slot() {
    let store = LocalSessionStore::default();
    store.save("raw-token").unwrap();

    let raw = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(AuthConfig::TOKEN_KEY).ok().flatten());
    assert_eq!(raw.as_deref(), Some("raw-token"));

    store.clear().unwrap();
}
