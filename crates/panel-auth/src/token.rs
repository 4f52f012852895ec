//! Bearer token verification.
//!
//! Tokens are JWTs issued by the external identity provider. Their claims are
//! trusted only after the signature checks out against the key configured in
//! `auth.public_key_pem` (RS256) or `auth.jwt_secret` (HS256).

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use panel_config::AuthConfig;
use serde::Deserialize;

use crate::claims::PanelClaims;
use crate::error::AuthError;

/// Tokens expiring within this window are treated as expired.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct Payload {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Checks bearer token signatures against one configured key.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    fn new(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["sub"]);
        validation.validate_aud = false;
        validation.leeway = 0;
        Self { key, validation }
    }

    /// HS256 verifier over a shared secret.
    #[must_use]
    pub fn hs256(secret: &str) -> Self {
        Self::new(DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
    }

    /// RS256 verifier over a PEM-encoded RSA public key.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidKey` if the PEM cannot be parsed.
    pub fn rs256(public_key_pem: &str) -> Result<Self, AuthError> {
        let key = DecodingKey::from_rsa_pem(public_key_pem.trim().as_bytes())
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self::new(key, Algorithm::RS256))
    }

    /// Build the verifier for `auth`, or `None` when no key is configured.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidKey` for an unparseable public key.
    pub fn from_config(auth: &AuthConfig) -> Result<Option<Self>, AuthError> {
        if !auth.public_key_pem.trim().is_empty() {
            return Self::rs256(&auth.public_key_pem).map(Some);
        }
        if !auth.jwt_secret.is_empty() {
            return Ok(Some(Self::hs256(&auth.jwt_secret)));
        }
        Ok(None)
    }

    /// Verify the signature and expiry of `raw` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` for a token past its `exp`, and
    /// `AuthError::InvalidToken` for a bad signature, a disallowed algorithm
    /// (including `none`), or a malformed token.
    pub fn verify(&self, raw: &str) -> Result<PanelClaims, AuthError> {
        let raw = raw.trim();
        let data = jsonwebtoken::decode::<Payload>(raw, &self.key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            },
        )?;
        let payload = data.claims;

        let expires_at = payload
            .exp
            .map(|exp| {
                chrono::DateTime::from_timestamp(exp, 0)
                    .ok_or_else(|| AuthError::InvalidToken(format!("invalid exp timestamp {exp}")))
            })
            .transpose()?;

        Ok(PanelClaims {
            raw_token: raw.to_string(),
            subject: payload.sub,
            email: payload.email.filter(|email| !email.is_empty()),
            expires_at,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64::Engine as _;
    use jsonwebtoken::{EncodingKey, Header};
    use panel_config::AuthConfig;

    pub const SECRET: &str = "panel-test-secret";

    /// HS256 token over `claims`, signed with [`SECRET`].
    pub fn sign(claims: &serde_json::Value) -> String {
        sign_with(claims, SECRET)
    }

    pub fn sign_with(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encode token")
    }

    /// `alg: none` token with an empty signature.
    pub fn unsigned(claims: &serde_json::Value) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = engine.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let payload = engine.encode(claims.to_string());
        format!("{header}.{payload}.")
    }

    pub fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.into(),
            ..AuthConfig::default()
        }
    }
}
