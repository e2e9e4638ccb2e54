//! `localStorage`-backed session token store.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR and native test builds see an empty store
//! that accepts writes, keeping server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use tenants::{StoreError, TokenStore};
#[cfg(feature = "hydrate")]
use tenants::TOKEN_STORAGE_KEY;

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
