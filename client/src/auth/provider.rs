//! Capability set the app needs from an external identity provider.

use super::error::AuthError;
use crate::net::types::User;

/// Identity provider operations.
///
/// Implementations return the resulting identity but never touch application
/// session state; `AuthClient` publishes changes on the session feed.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Clone + 'static {
    /// Create an identity and sign it in.
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<User, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Federated Google sign-in through a provider-rendered popup.
    async fn sign_in_with_google(&self) -> Result<User, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Recover a persisted session at startup, if one exists and is still valid.
    async fn restore(&self) -> Option<User>;
}
