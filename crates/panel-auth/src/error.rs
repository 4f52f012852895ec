use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token expired, run `panel auth login` with a fresh token")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("invalid token verification key: {0}")]
    InvalidKey(String),

    #[error("no token verification key configured, set auth.public_key_pem or auth.jwt_secret")]
    NoVerificationKey,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
