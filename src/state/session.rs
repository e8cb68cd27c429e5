//! Session token holder shared by the navigation guard and the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is an opaque string written by the sign-in flow and read on every
//! navigation and every API request. Reads check the in-memory holder first
//! and fall back to persistent storage under the `"token"` key.
//!
//! The token is a client-side convenience, not a credential check. Never log
//! its value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use leptos::prelude::{provide_context, use_context};
use thiserror::Error;

/// Persistent storage key holding the token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("token storage is unavailable")]
    Unavailable,
    #[error("token storage access failed: {0}")]
    Access(String),
}

/// Synchronous key-value storage for the token.
pub trait TokenStore: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Outside the browser build every call reports
/// [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window.local_storage().map_err(js_error)?.ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
#[allow(clippy::needless_pass_by_value)]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TOKEN_KEY.to_owned(), token.to_owned());
        storage
    }
}

impl TokenStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// Explicit session handle. Clones share the same holder and store.
#[derive(Clone)]
pub struct Session {
    holder: Arc<RwLock<Option<String>>>,
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("held", &self.held().is_some())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            holder: Arc::new(RwLock::new(None)),
            store: Arc::new(store),
        }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    fn held(&self) -> Option<String> {
        self.holder
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    /// Current token: in-memory holder first, then persistent storage.
    /// Empty strings count as no token.
    ///
    /// # Errors
    ///
    /// Propagates the store's [`StorageError`] unchanged.
    pub fn token(&self) -> Result<Option<String>, StorageError> {
        if let Some(token) = self.held() {
            return Ok(Some(token));
        }
        Ok(self.store.get(TOKEN_KEY)?.filter(|token| !token.is_empty()))
    }

    /// Whether a token is present. A storage failure reads as "no token".
    pub fn has_token(&self) -> bool {
        matches!(self.token(), Ok(Some(_)))
    }

    /// Hold `token` in memory and persist it.
    ///
    /// # Errors
    ///
    /// Returns the store's error if persisting fails; the in-memory holder is
    /// still updated.
    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        *self.holder.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        self.store.set(TOKEN_KEY, token)
    }

    /// Drop the token from memory and storage.
    ///
    /// # Errors
    ///
    /// Returns the store's error if removal fails; the in-memory holder is
    /// still cleared.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        *self.holder.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.remove(TOKEN_KEY)
    }
}

/// Make `session` available to the component tree.
pub fn provide_session(session: Session) {
    provide_context(session);
}

/// Session from context, or a fresh browser-backed one if none was provided.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(Session::browser)
}
