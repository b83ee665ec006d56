use super::*;

fn ada() -> User {
    User {
        uid: "u-ada".to_owned(),
        display_name: Some("Ada".to_owned()),
        email: Some("ada@example.com".to_owned()),
        created_at_ms: None,
    }
}

// =============================================================
// SessionStatus
// =============================================================

#[test]
fn session_status_starts_unknown() {
    let status = SessionStatus::default();
    assert_eq!(status, SessionStatus::Unknown);
    assert!(!status.is_anonymous());
    assert!(status.user().is_none());
}

#[test]
fn session_status_from_provider_change() {
    assert_eq!(SessionStatus::from(None), SessionStatus::Anonymous);
    let status = SessionStatus::from(Some(ada()));
    assert!(!status.is_anonymous());
    assert_eq!(status.user().map(|u| u.uid.as_str()), Some("u-ada"));
}

// =============================================================
// guard
// =============================================================

#[test]
fn guard_renders_for_signed_in_session() {
    assert_eq!(guard(&SessionStatus::SignedIn(ada()), "/my-profile"), GuardDecision::Render);
}

#[test]
fn guard_waits_while_session_unknown() {
    assert_eq!(guard(&SessionStatus::Unknown, "/my-profile"), GuardDecision::Wait);
}

#[test]
fn guard_redirects_anonymous_with_intent() {
    assert_eq!(
        guard(&SessionStatus::Anonymous, "/pets-news/4"),
        GuardDecision::Redirect("/login?from=%2Fpets-news%2F4".to_owned())
    );
}

#[test]
fn guard_revokes_access_after_logout() {
    let path = "/my-profile";
    let mut status = SessionStatus::SignedIn(ada());
    assert_eq!(guard(&status, path), GuardDecision::Render);
    status = SessionStatus::from(None);
    assert!(matches!(guard(&status, path), GuardDecision::Redirect(_)));
}
