//! # panel-auth
//!
//! Caller identity for Panel.
//!
//! Tokens are issued by an external identity provider. This crate verifies
//! their signature against the configured key, stores them between CLI
//! invocations, and exposes the [`IdentityProvider`] seam that hands an
//! `Option<AuthIdentity>` to every access operation.

pub mod claims;
pub mod error;
pub mod provider;
pub mod token;
pub mod token_store;

use panel_config::AuthConfig;

pub use claims::PanelClaims;
pub use error::AuthError;
pub use token::TokenVerifier;
pub use provider::{
    AnonymousProvider, IdentityProvider, StaticProvider, TokenProvider, resolve_provider,
};

/// Verify and store a bearer token issued by the identity provider.
///
/// # Errors
///
/// Returns `AuthError::NoVerificationKey` when `auth` holds no key,
/// `AuthError::InvalidToken` if the signature does not verify,
/// `AuthError::TokenExpired` for an expired token, or
/// `AuthError::TokenStoreError` if it cannot be written.
pub fn login(raw_token: &str, auth: &AuthConfig) -> Result<PanelClaims, AuthError> {
    let verifier = TokenVerifier::from_config(auth)?.ok_or(AuthError::NoVerificationKey)?;
    let claims = verifier.verify(raw_token)?;
    if claims.is_near_expiry(token::EXPIRY_BUFFER_SECS) {
        return Err(AuthError::TokenExpired);
    }
    token_store::store(raw_token)?;
    Ok(claims)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
