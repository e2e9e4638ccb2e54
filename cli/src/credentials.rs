//! The CLI session and where its token came from.
//!
//! A token passed with `--token`/`MEDIQLO_TOKEN` overrides the token file for
//! one invocation. Rejecting it must not delete the file, which may still hold
//! a valid session.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use tenants::{MemoryTokenStore, Session, StoreError};

use crate::token_file::FileTokenStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSource {
    /// Read from (or written to) the token file.
    Stored,
    /// Given on the command line or in the environment.
    Override,
}

#[derive(Debug)]
pub struct Credentials {
    store: FileTokenStore,
    session: Session,
    source: TokenSource,
}

impl Credentials {
    /// Restore from the token file unless a non-blank override is given.
    pub fn open(store: FileTokenStore, override_token: Option<&str>) -> Self {
        match override_token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Self {
                session: Session::restore(&MemoryTokenStore::with_token(token)),
                store,
                source: TokenSource::Override,
            },
            None => Self {
                session: Session::restore(&store),
                store,
                source: TokenSource::Stored,
            },
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }

    pub fn store(&self) -> &FileTokenStore {
        &self.store
    }

    /// Persist a fresh token. From here on the file is the source.
    pub fn sign_in(&mut self, token: String) -> Result<(), StoreError> {
        self.source = TokenSource::Stored;
        self.session.sign_in(&self.store, token)
    }

    /// Explicit logout always clears the token file.
    pub fn sign_out(&mut self) -> Result<(), StoreError> {
        self.session.sign_out(&self.store)
    }

    /// Forget a token the backend rejected. The file is cleared only when it
    /// held that token.
    pub fn expire(&mut self) -> Result<(), StoreError> {
        match self.source {
            TokenSource::Stored => self.session.sign_out(&self.store),
            TokenSource::Override => self.session.sign_out(&MemoryTokenStore::default()),
        }
    }

    /// One-line status for `whoami`.
    pub fn describe(&self) -> String {
        if !self.session.is_authenticated() {
            return "signed out".to_owned();
        }
        match self.source {
            TokenSource::Stored => format!("signed in (token file: {})", self.store.path().display()),
            TokenSource::Override => "signed in (token from --token or MEDIQLO_TOKEN)".to_owned(),
        }
    }
}
