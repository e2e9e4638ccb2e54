//! Session holder and the view it selects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in two places: a persistent [`TokenStore`] (browser
//! `localStorage`, or a file for the CLI) and the in-memory [`Session`].
//! Holding a token means the operator is presumed signed in until the backend
//! answers 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Mutex;

/// Key the token is persisted under.
pub const TOKEN_STORAGE_KEY: &str = "superAdminToken";

/// Error raised by a [`TokenStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing storage could not be reached (no window, quota, poisoned lock).
    #[error("token storage unavailable: {0}")]
    Unavailable(String),
    #[error("token storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent home of the session token.
pub trait TokenStore {
    /// Load the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Which top-level view the console shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
}

/// In-memory session mirror.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Start a session from whatever `store` holds. Unreadable storage or a
    /// blank token starts signed out.
    pub fn restore(store: &impl TokenStore) -> Self {
        let token = store
            .load()
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty());
        Self { token }
    }

    /// Hold `token` and persist it.
    ///
    /// The in-memory token is set even if persisting fails, so the current
    /// page stays signed in.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the token could not be persisted.
    pub fn sign_in(&mut self, store: &impl TokenStore, token: String) -> Result<(), StoreError> {
        let persisted = store.save(&token);
        self.token = Some(token);
        persisted
    }

    /// Drop the token from memory and storage. No backend call is made.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the persisted token could not be removed.
    /// The in-memory token is cleared regardless.
    pub fn sign_out(&mut self, store: &impl TokenStore) -> Result<(), StoreError> {
        self.token = None;
        store.clear()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn view(&self) -> View {
        if self.is_authenticated() {
            View::Dashboard
        } else {
            View::Login
        }
    }
}
