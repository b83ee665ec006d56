//! Identity-provider errors normalized at the boundary.
//!
//! `AuthErrorKind::from_code` is the only place provider error codes are
//! interpreted. It accepts the Identity Toolkit REST codes (`EMAIL_EXISTS`,
//! `WEAK_PASSWORD : Password should be ...`) and the JS SDK spellings
//! (`auth/email-already-in-use`), and anything else becomes `Other`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidEmail,
    WeakPassword,
    EmailAlreadyInUse,
    UserNotFound,
    WrongPassword,
    TooManyRequests,
    PopupClosedByUser,
    PopupBlocked,
    PopupCancelled,
    Other,
}

/// The user-facing operation that failed. Selects the fallback message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    Signup,
    Google,
    Logout,
}

impl AuthErrorKind {
    /// Translate a provider error code.
    pub fn from_code(code: &str) -> Self {
        // REST messages may carry a detail suffix: "WEAK_PASSWORD : Password should be ...".
        let code = code.split_once(" : ").map_or(code, |(head, _)| head).trim();
        match code {
            "INVALID_EMAIL" | "auth/invalid-email" => Self::InvalidEmail,
            "WEAK_PASSWORD" | "auth/weak-password" => Self::WeakPassword,
            "EMAIL_EXISTS" | "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" | "auth/user-not-found" => Self::UserNotFound,
            "INVALID_PASSWORD" | "auth/wrong-password" => Self::WrongPassword,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => Self::TooManyRequests,
            "auth/popup-closed-by-user" => Self::PopupClosedByUser,
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/cancelled-popup-request" => Self::PopupCancelled,
            _ => Self::Other,
        }
    }

    /// Message shown in the page's error banner.
    pub fn message(self, action: AuthAction) -> &'static str {
        match self {
            Self::InvalidEmail => "Invalid email address.",
            Self::WeakPassword => "Password is too weak. Please choose a stronger password.",
            Self::EmailAlreadyInUse => "This email is already registered. Please use a different email.",
            Self::UserNotFound => "No account found with this email address.",
            Self::WrongPassword => "Incorrect password. Please try again.",
            Self::TooManyRequests => "Too many failed attempts. Please try again later.",
            Self::PopupClosedByUser => "Sign-in popup was closed. Please try again.",
            Self::PopupBlocked => "Popup was blocked by your browser. Please allow popups and try again.",
            Self::PopupCancelled => "Sign-in was cancelled. Please try again.",
            Self::Other => match action {
                AuthAction::Login => "Login failed. Please check your credentials.",
                AuthAction::Signup => "Registration failed. Please try again.",
                AuthAction::Google => "Google Sign-In failed. Please try again.",
                AuthAction::Logout => "Logout failed. Please try again.",
            },
        }
    }
}

/// A failed identity-provider operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind:?}: {detail}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    /// Raw provider code or transport error, kept for the console log.
    pub detail: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self { kind, detail: detail.into() }
    }

    /// Build from a provider error code.
    pub fn from_code(code: &str) -> Self {
        Self::new(AuthErrorKind::from_code(code), code)
    }

    /// Transport or decoding failure outside the provider's code table.
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Other, detail)
    }

    pub fn message(&self, action: AuthAction) -> &'static str {
        self.kind.message(action)
    }
}
