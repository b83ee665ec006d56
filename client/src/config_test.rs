use super::*;

#[test]
fn missing_values_leave_provider_unconfigured() {
    let cfg = IdentityConfig::from_values(None, None, None, None);
    assert!(!cfg.is_configured());
    assert!(!cfg.google_enabled());
    assert_eq!(cfg.identity_endpoint, DEFAULT_IDENTITY_ENDPOINT);
    assert_eq!(cfg.token_endpoint, DEFAULT_TOKEN_ENDPOINT);
}

#[test]
fn blank_key_counts_as_missing() {
    let cfg = IdentityConfig::from_values(Some("   "), Some("client"), None, None);
    assert!(!cfg.is_configured());
    assert!(!cfg.google_enabled());
}

#[test]
fn google_needs_both_key_and_client_id() {
    assert!(!IdentityConfig::from_values(Some("k"), None, None, None).google_enabled());
    assert!(IdentityConfig::from_values(Some("k"), Some("c"), None, None).google_enabled());
}

#[test]
fn account_url_appends_method_and_key() {
    let cfg = IdentityConfig::from_values(Some("abc"), None, None, None);
    assert_eq!(
        cfg.account_url("signInWithPassword"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=abc"
    );
    assert_eq!(cfg.token_url(), "https://securetoken.googleapis.com/v1/token?key=abc");
}

#[test]
fn endpoint_overrides_drop_trailing_slash() {
    let cfg = IdentityConfig::from_values(
        Some("k"),
        None,
        Some("http://localhost:9099/identitytoolkit.googleapis.com/v1/"),
        Some(" "),
    );
    assert_eq!(cfg.identity_endpoint, "http://localhost:9099/identitytoolkit.googleapis.com/v1");
    assert_eq!(cfg.token_endpoint, DEFAULT_TOKEN_ENDPOINT);
}
