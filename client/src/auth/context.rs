//! Leptos context exposing the session and the auth verbs to the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` runs once in `App`. It subscribes to the session feed and
//! pumps every change into the `session` signal, which is the only way that
//! signal is ever written. Pages call the verbs and react to the signal; they
//! never write session state themselves.

use futures::StreamExt;
use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;

use super::client::{AuthClient, LogoutOutcome};
use super::error::AuthError;
use super::firebase::FirebaseProvider;
use crate::config::IdentityConfig;
use crate::net::types::User;
use crate::state::session::SessionStatus;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<SessionStatus>,
    logout_pending: RwSignal<bool>,
    client: StoredValue<AuthClient<FirebaseProvider>>,
}

/// Build the auth client, start the session pump, and provide `AuthContext`.
pub fn provide_auth() -> AuthContext {
    let config = IdentityConfig::embedded();
    let client = AuthClient::new(FirebaseProvider::new(config));
    let session = RwSignal::new(SessionStatus::Unknown);
    let ctx = AuthContext { session, logout_pending: RwSignal::new(false), client: StoredValue::new(client.clone()) };

    let mut changes = client.subscribe();
    let (pump, registration) = AbortHandle::new_pair();
    let pump_task = Abortable::new(
        async move {
            while let Some(change) = changes.next().await {
                session.set(SessionStatus::from(change));
            }
        },
        registration,
    );
    on_cleanup(move || pump.abort());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let _ = pump_task.await;
        });
        leptos::task::spawn_local(async move {
            client.restore().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop((pump_task, client));

    provide_context(ctx);
    ctx
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    /// Reactive read of the session.
    pub fn status(&self) -> SessionStatus {
        self.session.get()
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|status| status.user().cloned())
    }

    pub fn logout_pending(&self) -> bool {
        self.logout_pending.get()
    }

    pub fn google_enabled(&self) -> bool {
        self.client.with_value(|client| client.provider().config().google_enabled())
    }

    /// # Errors
    ///
    /// See [`AuthClient::signup`].
    pub async fn signup(
        self,
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> Result<(), AuthError> {
        let client = self.client.get_value();
        client.signup(&email, &password, &first_name, &last_name).await
    }

    /// # Errors
    ///
    /// See [`AuthClient::login`].
    pub async fn login(self, email: String, password: String) -> Result<(), AuthError> {
        let client = self.client.get_value();
        client.login(&email, &password).await
    }

    /// # Errors
    ///
    /// See [`AuthClient::sign_in_with_google`].
    pub async fn sign_in_with_google(self) -> Result<(), AuthError> {
        let client = self.client.get_value();
        client.sign_in_with_google().await
    }

    /// # Errors
    ///
    /// See [`AuthClient::logout`].
    pub async fn logout(self) -> Result<LogoutOutcome, AuthError> {
        let client = self.client.get_value();
        self.logout_pending.set(true);
        let result = client.logout().await;
        self.logout_pending.set(client.logout_in_flight());
        result
    }
}
