//! The identity-provider seam.
//!
//! Every access operation takes the caller identity as an explicit
//! `Option<&AuthIdentity>`. Front ends obtain that value once per operation
//! from an [`IdentityProvider`].
//!
//! Only [`TokenProvider`] yields a verified identity. [`StaticProvider`] backs
//! the `--as` flag and `auth.email`, which are unauthenticated development
//! overrides: whoever runs the command chooses the identity.

use panel_config::PanelConfig;
use panel_core::identity::AuthIdentity;

use crate::error::AuthError;
use crate::token::{EXPIRY_BUFFER_SECS, TokenVerifier};
use crate::token_store;

/// Supplies the caller identity for one operation.
pub trait IdentityProvider {
    /// The caller identity, or `None` when the caller is unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when the provider's credential is forged or malformed.
    fn caller_identity(&self) -> Result<Option<AuthIdentity>, AuthError>;

    /// Short label for where the identity comes from (`override`, `env`, `file`, `config`).
    fn source(&self) -> Option<&'static str>;
}

/// No caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousProvider;

impl IdentityProvider for AnonymousProvider {
    fn caller_identity(&self) -> Result<Option<AuthIdentity>, AuthError> {
        Ok(None)
    }

    fn source(&self) -> Option<&'static str> {
        None
    }
}

/// A fixed identity taken on trust.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    identity: AuthIdentity,
    source: &'static str,
}

impl StaticProvider {
    #[must_use]
    pub const fn new(identity: AuthIdentity, source: &'static str) -> Self {
        Self { identity, source }
    }
}

impl IdentityProvider for StaticProvider {
    fn caller_identity(&self) -> Result<Option<AuthIdentity>, AuthError> {
        Ok(Some(self.identity.clone()))
    }

    fn source(&self) -> Option<&'static str> {
        Some(self.source)
    }
}

/// Identity read from a bearer token after signature verification.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    token: String,
    source: &'static str,
    verifier: TokenVerifier,
}

impl TokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>, source: &'static str, verifier: TokenVerifier) -> Self {
        Self {
            token: token.into(),
            source,
            verifier,
        }
    }
}

impl IdentityProvider for TokenProvider {
    fn caller_identity(&self) -> Result<Option<AuthIdentity>, AuthError> {
        let claims = match self.verifier.verify(&self.token) {
            Ok(claims) => claims,
            Err(AuthError::TokenExpired) => {
                tracing::warn!("auth token expired, treating caller as unauthenticated");
                return Ok(None);
            }
            Err(error) => return Err(error),
        };
        if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
            tracing::warn!(
                expires_at = ?claims.expires_at,
                "auth token expires within {EXPIRY_BUFFER_SECS}s, treating caller as unauthenticated",
            );
            return Ok(None);
        }
        Ok(Some(claims.to_identity()))
    }

    fn source(&self) -> Option<&'static str> {
        Some(self.source)
    }
}

/// Pick the identity provider for this invocation.
///
/// Priority: `--as` override → stored bearer token (env, then file) →
/// `auth.email` from config → anonymous. A stored token is skipped with a
/// warning when no verification key is configured.
///
/// # Errors
///
/// Returns `AuthError::InvalidKey` when the configured public key cannot be parsed.
pub fn resolve_provider(
    override_email: Option<&str>,
    config: &PanelConfig,
) -> Result<Box<dyn IdentityProvider>, AuthError> {
    if let Some(email) = override_email.filter(|e| !e.trim().is_empty()) {
        tracing::debug!(email, "acting as unauthenticated override identity");
        return Ok(Box::new(StaticProvider::new(
            AuthIdentity::from_email(email),
            "override",
        )));
    }
    if let Some(token) = token_store::load() {
        let source = token_store::detect_token_source().unwrap_or("file");
        match TokenVerifier::from_config(&config.auth)? {
            Some(verifier) => return Ok(Box::new(TokenProvider::new(token, source, verifier))),
            None => tracing::warn!(
                source,
                "ignoring stored auth token: no verification key configured"
            ),
        }
    }
    if config.auth.is_configured() {
        tracing::debug!("acting as auth.email from config (unauthenticated)");
        return Ok(Box::new(StaticProvider::new(
            AuthIdentity::from_email(config.auth.email.trim()),
            "config",
        )));
    }
    Ok(Box::new(AnonymousProvider))
}
