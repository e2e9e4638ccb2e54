use super::*;

struct BrokenStore;

impl TokenStore for BrokenStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("no storage".to_owned()))
    }

    fn save(&self, _token: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no storage".to_owned()))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("no storage".to_owned()))
    }
}

#[test]
fn storage_key_is_fixed() {
    assert_eq!(TOKEN_STORAGE_KEY, "superAdminToken");
}

#[test]
fn empty_store_restores_to_login() {
    let session = Session::restore(&MemoryTokenStore::default());
    assert!(!session.is_authenticated());
    assert_eq!(session.view(), View::Login);
}

#[test]
fn persisted_token_restores_to_dashboard() {
    let session = Session::restore(&MemoryTokenStore::with_token("tok-1"));
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.view(), View::Dashboard);
}

#[test]
fn blank_persisted_token_is_ignored() {
    let session = Session::restore(&MemoryTokenStore::with_token("  "));
    assert_eq!(session.view(), View::Login);
}

#[test]
fn sign_in_persists_and_switches_view() {
    let store = MemoryTokenStore::default();
    let mut session = Session::default();
    session.sign_in(&store, "tok-2".to_owned()).expect("sign in");
    assert_eq!(session.view(), View::Dashboard);
    assert_eq!(store.load().expect("load"), Some("tok-2".to_owned()));
}

#[test]
fn sign_out_clears_memory_and_store() {
    let store = MemoryTokenStore::with_token("tok-3");
    let mut session = Session::restore(&store);
    session.sign_out(&store).expect("sign out");
    assert_eq!(session.view(), View::Login);
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn broken_store_still_updates_memory() {
    let mut session = Session::restore(&BrokenStore);
    assert_eq!(session.view(), View::Login);

    assert!(session.sign_in(&BrokenStore, "tok".to_owned()).is_err());
    assert_eq!(session.view(), View::Dashboard);

    assert!(session.sign_out(&BrokenStore).is_err());
    assert_eq!(session.view(), View::Login);
}
