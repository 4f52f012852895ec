//! Caller identity configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Email to act as when no bearer token is stored.
    ///
    /// Unauthenticated development override: nothing proves the caller owns
    /// this address. Leave empty in shared setups.
    #[serde(default)]
    pub email: String,

    /// Shared HS256 secret used to verify bearer tokens.
    #[serde(default)]
    pub jwt_secret: String,

    /// PEM-encoded RSA public key used to verify RS256 bearer tokens.
    /// Takes precedence over `jwt_secret` when both are set.
    #[serde(default)]
    pub public_key_pem: String,
}

impl AuthConfig {
    /// Whether a development override email is set.
    pub fn is_configured(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Whether bearer tokens can be verified.
    pub fn can_verify_tokens(&self) -> bool {
        !self.public_key_pem.trim().is_empty() || !self.jwt_secret.is_empty()
    }
}
