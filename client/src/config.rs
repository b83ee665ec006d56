//! Identity provider configuration embedded at build time.
//!
//! Provider credentials are public web-client values baked into the WASM
//! bundle through `option_env!`. A build without `TOYTOPIA_FIREBASE_API_KEY`
//! still runs; every provider call then fails with an `Other` error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://securetoken.googleapis.com/v1/token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    /// OAuth client id used for the Google popup.
    pub google_client_id: String,
    pub identity_endpoint: String,
    pub token_endpoint: String,
}

impl IdentityConfig {
    /// Configuration compiled into this build.
    ///
    /// - `TOYTOPIA_FIREBASE_API_KEY`: web API key (required for auth to work)
    /// - `TOYTOPIA_GOOGLE_CLIENT_ID`: OAuth client id (required for Google sign-in)
    /// - `TOYTOPIA_IDENTITY_ENDPOINT` / `TOYTOPIA_TOKEN_ENDPOINT`: override for the auth emulator
    pub fn embedded() -> Self {
        Self::from_values(
            option_env!("TOYTOPIA_FIREBASE_API_KEY"),
            option_env!("TOYTOPIA_GOOGLE_CLIENT_ID"),
            option_env!("TOYTOPIA_IDENTITY_ENDPOINT"),
            option_env!("TOYTOPIA_TOKEN_ENDPOINT"),
        )
    }

    pub fn from_values(
        api_key: Option<&str>,
        google_client_id: Option<&str>,
        identity_endpoint: Option<&str>,
        token_endpoint: Option<&str>,
    ) -> Self {
        let trimmed = |value: Option<&str>| value.map(str::trim).unwrap_or_default().to_owned();
        let endpoint = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .trim_end_matches('/')
                .to_owned()
        };
        Self {
            api_key: trimmed(api_key),
            google_client_id: trimmed(google_client_id),
            identity_endpoint: endpoint(identity_endpoint, DEFAULT_IDENTITY_ENDPOINT),
            token_endpoint: endpoint(token_endpoint, DEFAULT_TOKEN_ENDPOINT),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn google_enabled(&self) -> bool {
        self.is_configured() && !self.google_client_id.is_empty()
    }

    /// Identity Toolkit URL for an `accounts:<method>` call.
    pub fn account_url(&self, method: &str) -> String {
        format!("{}/accounts:{method}?key={}", self.identity_endpoint, urlencoding::encode(&self.api_key))
    }

    /// Secure Token URL for refresh-token exchange.
    pub fn token_url(&self) -> String {
        format!("{}?key={}", self.token_endpoint, urlencoding::encode(&self.api_key))
    }
}
