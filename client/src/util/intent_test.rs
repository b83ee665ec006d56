use super::*;

#[test]
fn login_redirect_encodes_requested_path() {
    assert_eq!(login_redirect("/pets-news/3"), "/login?from=%2Fpets-news%2F3");
    assert_eq!(login_redirect("/my-profile"), "/login?from=%2Fmy-profile");
}

#[test]
fn return_target_round_trips_guarded_path() {
    // The router hands the page the already-decoded query value.
    let encoded = login_redirect("/pets-news/3");
    let raw = encoded.split_once("from=").map(|(_, v)| v).unwrap();
    let decoded = urlencoding::decode(raw).unwrap();
    assert_eq!(return_target(Some(&decoded)), "/pets-news/3");
}

#[test]
fn return_target_defaults_to_home() {
    assert_eq!(return_target(None), "/");
    assert_eq!(return_target(Some("")), "/");
    assert_eq!(return_target(Some("   ")), "/");
}

#[test]
fn return_target_rejects_external_destinations() {
    assert_eq!(return_target(Some("https://evil.example/")), "/");
    assert_eq!(return_target(Some("//evil.example/path")), "/");
    assert_eq!(return_target(Some("/\\evil.example")), "/");
    assert_eq!(return_target(Some("pets-news/3")), "/");
}

#[test]
fn return_target_never_loops_back_to_login() {
    assert_eq!(return_target(Some("/login")), "/");
}

#[test]
fn pending_intent_only_for_non_home_targets() {
    assert!(has_pending_intent(Some("/my-profile")));
    assert!(!has_pending_intent(Some("/")));
    assert!(!has_pending_intent(None));
}
