use super::*;
use tenants::MemoryTokenStore;

#[test]
fn view_is_pending_until_restored() {
    let state = SessionState::default();
    assert_eq!(state.current_view(), None);
}

#[test]
fn restore_with_token_shows_dashboard() {
    let mut state = SessionState::default();
    state.restore(&MemoryTokenStore::with_token("tok"));
    assert_eq!(state.current_view(), Some(View::Dashboard));
    assert_eq!(state.token().as_deref(), Some("tok"));
}

#[test]
fn sign_in_from_login_persists_and_moves_to_dashboard() {
    let store = MemoryTokenStore::default();
    let mut state = SessionState::default();
    state.restore(&store);
    assert_eq!(state.current_view(), Some(View::Login));

    state.sign_in(&store, "fresh".to_owned());

    assert_eq!(state.current_view(), Some(View::Dashboard));
    assert_eq!(store.load().expect("load").as_deref(), Some("fresh"));
}

#[test]
fn sign_out_returns_to_login_and_clears_store() {
    let store = MemoryTokenStore::with_token("tok");
    let mut state = SessionState::default();
    state.restore(&store);

    state.sign_out(&store);

    assert_eq!(state.current_view(), Some(View::Login));
    assert_eq!(store.load().expect("load"), None);
}
