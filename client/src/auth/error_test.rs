use super::*;

// =============================================================
// Code translation
// =============================================================

#[test]
fn rest_codes_translate() {
    assert_eq!(AuthErrorKind::from_code("EMAIL_EXISTS"), AuthErrorKind::EmailAlreadyInUse);
    assert_eq!(AuthErrorKind::from_code("EMAIL_NOT_FOUND"), AuthErrorKind::UserNotFound);
    assert_eq!(AuthErrorKind::from_code("INVALID_PASSWORD"), AuthErrorKind::WrongPassword);
    assert_eq!(AuthErrorKind::from_code("INVALID_EMAIL"), AuthErrorKind::InvalidEmail);
    assert_eq!(AuthErrorKind::from_code("TOO_MANY_ATTEMPTS_TRY_LATER"), AuthErrorKind::TooManyRequests);
}

#[test]
fn rest_codes_with_detail_suffix_translate() {
    assert_eq!(
        AuthErrorKind::from_code("WEAK_PASSWORD : Password should be at least 6 characters"),
        AuthErrorKind::WeakPassword
    );
}

#[test]
fn sdk_codes_translate() {
    assert_eq!(AuthErrorKind::from_code("auth/email-already-in-use"), AuthErrorKind::EmailAlreadyInUse);
    assert_eq!(AuthErrorKind::from_code("auth/weak-password"), AuthErrorKind::WeakPassword);
    assert_eq!(AuthErrorKind::from_code("auth/user-not-found"), AuthErrorKind::UserNotFound);
    assert_eq!(AuthErrorKind::from_code("auth/wrong-password"), AuthErrorKind::WrongPassword);
    assert_eq!(AuthErrorKind::from_code("auth/too-many-requests"), AuthErrorKind::TooManyRequests);
    assert_eq!(AuthErrorKind::from_code("auth/popup-closed-by-user"), AuthErrorKind::PopupClosedByUser);
    assert_eq!(AuthErrorKind::from_code("auth/popup-blocked"), AuthErrorKind::PopupBlocked);
    assert_eq!(AuthErrorKind::from_code("auth/cancelled-popup-request"), AuthErrorKind::PopupCancelled);
}

#[test]
fn unknown_and_ambiguous_codes_fall_back_to_other() {
    assert_eq!(AuthErrorKind::from_code("INVALID_LOGIN_CREDENTIALS"), AuthErrorKind::Other);
    assert_eq!(AuthErrorKind::from_code("auth/network-request-failed"), AuthErrorKind::Other);
    assert_eq!(AuthErrorKind::from_code(""), AuthErrorKind::Other);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn blocked_popup_message_is_actionable_and_distinct() {
    let blocked = AuthErrorKind::PopupBlocked.message(AuthAction::Google);
    let closed = AuthErrorKind::PopupClosedByUser.message(AuthAction::Google);
    assert!(blocked.contains("allow popups"));
    assert_ne!(blocked, closed);
}

#[test]
fn fallback_message_depends_on_action() {
    assert_eq!(
        AuthErrorKind::Other.message(AuthAction::Login),
        "Login failed. Please check your credentials."
    );
    assert_eq!(AuthErrorKind::Other.message(AuthAction::Signup), "Registration failed. Please try again.");
    assert_eq!(AuthErrorKind::Other.message(AuthAction::Google), "Google Sign-In failed. Please try again.");
}

#[test]
fn auth_error_keeps_raw_detail() {
    let err = AuthError::from_code("EMAIL_EXISTS");
    assert_eq!(err.kind, AuthErrorKind::EmailAlreadyInUse);
    assert_eq!(err.detail, "EMAIL_EXISTS");
    assert_eq!(err.to_string(), "EmailAlreadyInUse: EMAIL_EXISTS");
}

#[test]
fn transport_errors_are_other() {
    let err = AuthError::transport("connection reset");
    assert_eq!(err.kind, AuthErrorKind::Other);
    assert_eq!(err.message(AuthAction::Signup), "Registration failed. Please try again.");
}
