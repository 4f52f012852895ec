use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Verified caller identity for cross-crate passing.
///
/// Produced by `panel-auth`, consumed by `panel-db` access operations and
/// `panel-cli`. Contains only data fields, no verification logic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Provider subject (from the token `sub` claim, or the email for static identities).
    pub subject: String,
    /// Email-equivalent token used for every ownership and membership check.
    pub email: Option<String>,
}

impl AuthIdentity {
    /// Identity whose subject and email are the same token.
    #[must_use]
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            subject: email.clone(),
            email: Some(email),
        }
    }

    /// The email-equivalent token, if the provider supplied a non-empty one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
