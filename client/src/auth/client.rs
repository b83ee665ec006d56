//! Auth verbs over an identity provider plus the session feed they publish to.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged here with its raw provider detail before it is
//! returned, so pages only need to map `AuthErrorKind` to a banner.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::{AuthAction, AuthError};
use super::feed::{SessionFeed, SessionSubscription};
use super::provider::IdentityProvider;
use crate::state::forms::display_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    SignedOut,
    /// Another logout was still running; nothing was done.
    AlreadyInProgress,
}

#[derive(Clone)]
pub struct AuthClient<P> {
    provider: P,
    feed: SessionFeed,
    logout_in_flight: Arc<AtomicBool>,
}

impl<P: IdentityProvider> AuthClient<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, feed: SessionFeed::new(), logout_in_flight: Arc::new(AtomicBool::new(false)) }
    }

    pub fn subscribe(&self) -> SessionSubscription {
        self.feed.subscribe()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve the initial session and publish it, signed in or not.
    pub async fn restore(&self) {
        let user = self.provider.restore().await;
        log::info!("session restore: {}", if user.is_some() { "signed in" } else { "anonymous" });
        self.feed.publish(user);
    }

    /// Register a new identity named `"{first_name} {last_name}"`.
    ///
    /// The session itself is populated through the feed, not the return value.
    ///
    /// # Errors
    ///
    /// `InvalidEmail`, `WeakPassword`, `EmailAlreadyInUse`, or `Other`.
    pub async fn signup(&self, email: &str, password: &str, first_name: &str, last_name: &str) -> Result<(), AuthError> {
        let display_name = display_name(first_name, last_name);
        let user = self
            .provider
            .sign_up(email, password, &display_name)
            .await
            .inspect_err(|e| log_failure(AuthAction::Signup, e))?;
        self.feed.publish(Some(user));
        Ok(())
    }

    /// # Errors
    ///
    /// `UserNotFound`, `WrongPassword`, `InvalidEmail`, `TooManyRequests`, or `Other`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user = self
            .provider
            .sign_in(email, password)
            .await
            .inspect_err(|e| log_failure(AuthAction::Login, e))?;
        self.feed.publish(Some(user));
        Ok(())
    }

    /// # Errors
    ///
    /// `PopupClosedByUser`, `PopupBlocked`, `PopupCancelled`, or `Other`.
    pub async fn sign_in_with_google(&self) -> Result<(), AuthError> {
        let user = self
            .provider
            .sign_in_with_google()
            .await
            .inspect_err(|e| log_failure(AuthAction::Google, e))?;
        self.feed.publish(Some(user));
        Ok(())
    }

    /// Sign out. Calling it while signed out is a no-op success; calling it
    /// while another logout is pending returns `AlreadyInProgress`.
    ///
    /// # Errors
    ///
    /// Returns the provider's failure; the session is left unchanged.
    pub async fn logout(&self) -> Result<LogoutOutcome, AuthError> {
        if self.logout_in_flight.swap(true, Ordering::AcqRel) {
            log::debug!("logout already in flight; ignoring");
            return Ok(LogoutOutcome::AlreadyInProgress);
        }
        let result = self.provider.sign_out().await;
        self.logout_in_flight.store(false, Ordering::Release);
        result.inspect_err(|e| log_failure(AuthAction::Logout, e))?;
        self.feed.publish(None);
        Ok(LogoutOutcome::SignedOut)
    }

    pub fn logout_in_flight(&self) -> bool {
        self.logout_in_flight.load(Ordering::Acquire)
    }
}

fn log_failure(action: AuthAction, err: &AuthError) {
    log::error!("{action:?} failed: {err}");
}
