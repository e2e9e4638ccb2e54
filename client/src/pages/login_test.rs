use super::*;

#[test]
fn submit_label_reflects_pending_request() {
    assert_eq!(submit_label(false), "Sign in");
    assert_eq!(submit_label(true), "Signing in...");
}
