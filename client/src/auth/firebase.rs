//! Firebase Identity Toolkit provider.
//!
//! Client-side (hydrate): REST calls via `gloo-net`; the refresh token is
//! persisted in `localStorage` so a reload restores the session.
//! Server-side (SSR): every operation fails and `restore` reports no session,
//! which keeps the session `Unknown` until hydration resolves it.
//!
//! ERROR HANDLING
//! ==============
//! Non-OK responses carry `{"error": {"message": "<CODE>"}}`; the code goes
//! through `AuthErrorKind::from_code`. Transport and decode failures map to
//! `Other` with the underlying message kept for logging.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::popup::PopupTickets;
use super::provider::IdentityProvider;
use crate::config::IdentityConfig;
use crate::net::types::User;

/// `localStorage` key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "toytopia.auth.session";

#[derive(Clone, Debug)]
pub struct FirebaseProvider {
    config: IdentityConfig,
    tickets: PopupTickets,
}

impl FirebaseProvider {
    pub fn new(config: IdentityConfig) -> Self {
        if !config.is_configured() {
            log::warn!("identity provider API key missing; sign-in is disabled");
        }
        Self { config, tickets: PopupTickets::default() }
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    fn ensure_configured(&self) -> Result<(), AuthError> {
        if self.config.is_configured() {
            Ok(())
        } else {
            Err(AuthError::transport("identity provider API key is not configured"))
        }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Token bundle returned by sign-up, password sign-in, and IdP sign-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    id_token: String,
    refresh_token: String,
}

/// Secure Token API response (snake case on the wire).
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInfo {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    /// Milliseconds since epoch, as a decimal string.
    created_at: Option<String>,
}

impl AccountInfo {
    fn into_user(self) -> User {
        User {
            uid: self.local_id,
            display_name: self.display_name.filter(|name| !name.trim().is_empty()),
            email: self.email,
            created_at_ms: self.created_at.and_then(|raw| raw.trim().parse().ok()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    refresh_token: String,
}

/// Extract the provider error code from a failed response body.
fn provider_code(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body).ok().map(|envelope| envelope.error.message)
}

/// Turn a non-OK response into an `AuthError`.
fn error_from_response(status: u16, body: &str) -> AuthError {
    provider_code(body).map_or_else(
        || AuthError::transport(format!("identity request failed with status {status}")),
        |code| AuthError::from_code(&code),
    )
}

fn first_user(lookup: LookupResponse) -> Result<User, AuthError> {
    lookup
        .users
        .into_iter()
        .next()
        .map(AccountInfo::into_user)
        .ok_or_else(|| AuthError::from_code("USER_NOT_FOUND"))
}

/// `postBody` for `accounts:signInWithIdp` with a Google ID token.
fn google_idp_post_body(id_token: &str) -> String {
    format!("id_token={}&providerId=google.com", urlencoding::encode(id_token))
}

// =============================================================================
// REST PLUMBING (browser only)
// =============================================================================

#[cfg(feature = "hydrate")]
mod rest {
    use serde::de::DeserializeOwned;

    use super::{AuthError, LookupResponse, PersistedSession, RefreshResponse, SESSION_STORAGE_KEY, error_from_response};
    use crate::config::IdentityConfig;
    use crate::net::types::User;
    use crate::util::storage;

    pub(super) async fn post_json<T: DeserializeOwned>(url: &str, payload: &serde_json::Value) -> Result<T, AuthError> {
        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| AuthError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| AuthError::transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp.status(), &body));
        }
        serde_json::from_str(&body).map_err(|e| AuthError::transport(e.to_string()))
    }

    pub(super) async fn lookup(config: &IdentityConfig, id_token: &str) -> Result<User, AuthError> {
        let payload = serde_json::json!({ "idToken": id_token });
        let resp: LookupResponse = post_json(&config.account_url("lookup"), &payload).await?;
        super::first_user(resp)
    }

    pub(super) async fn refresh(config: &IdentityConfig, refresh_token: &str) -> Result<RefreshResponse, AuthError> {
        let form = format!("grant_type=refresh_token&refresh_token={}", urlencoding::encode(refresh_token));
        let resp = gloo_net::http::Request::post(&config.token_url())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(|e| AuthError::transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::transport(e.to_string()))?;
        let body = resp.text().await.map_err(|e| AuthError::transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp.status(), &body));
        }
        serde_json::from_str(&body).map_err(|e| AuthError::transport(e.to_string()))
    }

    pub(super) fn persist(refresh_token: String) {
        storage::save_json(SESSION_STORAGE_KEY, &PersistedSession { refresh_token });
    }

    pub(super) fn persisted() -> Option<PersistedSession> {
        storage::load_json(SESSION_STORAGE_KEY)
    }

    pub(super) fn forget() {
        storage::remove(SESSION_STORAGE_KEY);
    }
}

#[cfg(not(feature = "hydrate"))]
fn browser_only() -> AuthError {
    AuthError::transport("identity provider is only available in the browser")
}

impl IdentityProvider for FirebaseProvider {
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<User, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            let tokens: TokenResponse = rest::post_json(&self.config.account_url("signUp"), &payload).await?;
            let profile = serde_json::json!({
                "idToken": tokens.id_token,
                "displayName": display_name,
                "returnSecureToken": false,
            });
            let _: serde_json::Value = rest::post_json(&self.config.account_url("update"), &profile).await?;
            let user = rest::lookup(&self.config, &tokens.id_token).await?;
            rest::persist(tokens.refresh_token);
            log::info!("signed up {}", user.uid);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, display_name);
            Err(browser_only())
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.ensure_configured()?;
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password, "returnSecureToken": true });
            let tokens: TokenResponse =
                rest::post_json(&self.config.account_url("signInWithPassword"), &payload).await?;
            let user = rest::lookup(&self.config, &tokens.id_token).await?;
            rest::persist(tokens.refresh_token);
            log::info!("signed in {}", user.uid);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(browser_only())
        }
    }

    async fn sign_in_with_google(&self) -> Result<User, AuthError> {
        self.ensure_configured()?;
        if self.config.google_client_id.is_empty() {
            return Err(AuthError::transport("google client id is not configured"));
        }
        #[cfg(feature = "hydrate")]
        {
            let google_token = super::popup::request_google_id_token(&self.config.google_client_id, &self.tickets).await?;
            let request_uri = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            let payload = serde_json::json!({
                "postBody": google_idp_post_body(&google_token),
                "requestUri": request_uri,
                "returnIdpCredential": true,
                "returnSecureToken": true,
            });
            let tokens: TokenResponse = rest::post_json(&self.config.account_url("signInWithIdp"), &payload).await?;
            let user = rest::lookup(&self.config, &tokens.id_token).await?;
            rest::persist(tokens.refresh_token);
            log::info!("signed in {} with google", user.uid);
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.tickets, google_idp_post_body);
            Err(browser_only())
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        rest::forget();
        Ok(())
    }

    async fn restore(&self) -> Option<User> {
        if !self.config.is_configured() {
            return None;
        }
        #[cfg(feature = "hydrate")]
        {
            let saved = rest::persisted()?;
            let restored = async {
                let tokens = rest::refresh(&self.config, &saved.refresh_token).await?;
                let user = rest::lookup(&self.config, &tokens.id_token).await?;
                rest::persist(tokens.refresh_token);
                Ok::<_, AuthError>(user)
            }
            .await;
            match restored {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("persisted session rejected: {e}");
                    rest::forget();
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
