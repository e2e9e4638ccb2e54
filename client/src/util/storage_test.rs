#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert_eq!(BrowserTokenStore.load().expect("load"), None);
}

#[test]
fn writes_are_accepted_outside_browser() {
    assert!(BrowserTokenStore.save("tok").is_ok());
    assert!(BrowserTokenStore.clear().is_ok());
}
