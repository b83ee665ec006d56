//! Session status for the current browser user and the guard decision built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the auth context's subscription pump; read by the route
//! guard, the navbar, and pages that show login prompts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::intent;

/// Who is signed in, as last published by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The provider has not reported the initial session yet.
    #[default]
    Unknown,
    Anonymous,
    SignedIn(User),
}

impl SessionStatus {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    /// Anonymous once the provider has confirmed it, not while still unknown.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

impl From<Option<User>> for SessionStatus {
    fn from(change: Option<User>) -> Self {
        change.map_or(Self::Anonymous, Self::SignedIn)
    }
}

/// What a guarded route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet; show a placeholder, do not navigate.
    Wait,
    Render,
    /// Replace the current history entry with this login URL.
    Redirect(String),
}

/// Decide whether `requested_path` may render for `status`.
pub fn guard(status: &SessionStatus, requested_path: &str) -> GuardDecision {
    match status {
        SessionStatus::Unknown => GuardDecision::Wait,
        SessionStatus::SignedIn(_) => GuardDecision::Render,
        SessionStatus::Anonymous => GuardDecision::Redirect(intent::login_redirect(requested_path)),
    }
}
