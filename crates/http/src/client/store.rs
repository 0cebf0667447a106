//! Bearer credential persistence

use std::cell::RefCell;
use thiserror::Error;

/// Writes to the credential slot that did not take effect
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage backend in this environment
    #[error("session storage is unavailable")]
    Unavailable,

    /// The backend refused the write (quota, policy)
    #[error("session storage rejected the write: {0}")]
    Rejected(String),
}

/// Single-slot persistence for the bearer credential
///
/// Implementations never validate the credential. A backend that cannot be
/// read reports the credential as absent; failed writes are reported so the
/// caller never believes a credential is stored when it is not.
pub trait SessionStore {
    /// Overwrite the stored credential
    fn save(&self, credential: &str) -> Result<(), StoreError>;

    /// Stored credential, if any
    fn read(&self) -> Option<String>;

    /// Remove the stored credential. Idempotent.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory session store
///
/// Lives as long as the process; used outside the browser and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<String>>,
}

impl MemorySessionStore {
    /// Create a store already holding a credential
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(credential.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, credential: &str) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(credential.to_string());
        Ok(())
    }

    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_on_fresh_store_is_absent() {
        assert_eq!(MemorySessionStore::default().read(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemorySessionStore::with_credential("old");
        store.save("new").unwrap();
        assert_eq!(store.read().as_deref(), Some("new"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::with_credential("tok");
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }
}
