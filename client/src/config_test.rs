use super::*;

#[test]
fn api_url_is_normalized() {
    let url = api_url();
    assert!(!url.is_empty());
    assert!(!url.ends_with('/'));
    assert!(url.starts_with("http"));
}
