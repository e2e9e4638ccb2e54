use super::*;

#[test]
fn parse_port_unset_or_blank_is_none() {
    assert_eq!(parse_port(None).ok(), Some(None));
    assert_eq!(parse_port(Some("  ")).ok(), Some(None));
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some(" 8080 ")).ok(), Some(Some(8080)));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref v) if v == "eighty"));
}

#[test]
fn resolve_addr_prefers_port_override() {
    let site: SocketAddr = "127.0.0.1:3000".parse().expect("addr");
    assert_eq!(resolve_addr(site, None), site);
    assert_eq!(resolve_addr(site, Some(9000)).to_string(), "0.0.0.0:9000");
}
