//! Session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console page reads `current_view` to choose between login and
//! dashboard. Until the browser has restored the persisted token the view is
//! `None`, which keeps the server render and first client render identical.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tenants::{Session, TokenStore, View};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Session,
    pub restored: bool,
}

impl SessionState {
    pub fn restore(&mut self, store: &impl TokenStore) {
        self.session = Session::restore(store);
        self.restored = true;
    }

    pub fn sign_in(&mut self, store: &impl TokenStore, token: String) {
        if let Err(_e) = self.session.sign_in(store, token) {
            #[cfg(feature = "hydrate")]
            log::warn!("could not persist session token: {_e}");
        }
        self.restored = true;
    }

    pub fn sign_out(&mut self, store: &impl TokenStore) {
        if let Err(_e) = self.session.sign_out(store) {
            #[cfg(feature = "hydrate")]
            log::warn!("could not clear session token: {_e}");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.token().map(ToOwned::to_owned)
    }

    pub fn current_view(&self) -> Option<View> {
        self.restored.then(|| self.session.view())
    }
}
