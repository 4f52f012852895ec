use chrono::{DateTime, Utc};
use panel_core::identity::AuthIdentity;

/// Claims read from a bearer token issued by the identity provider.
#[derive(Debug, Clone)]
pub struct PanelClaims {
    pub raw_token: String,
    /// `sub` claim.
    pub subject: String,
    /// `email` claim. `None` when the provider did not include one.
    pub email: Option<String>,
    /// `exp` claim. `None` means the token does not expire.
    pub expires_at: Option<DateTime<Utc>>,
}

impl PanelClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            subject: self.subject.clone(),
            email: self.email.clone(),
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        expires_at <= Utc::now() + chrono::TimeDelta::seconds(buffer_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_claims(expires_at: Option<DateTime<Utc>>) -> PanelClaims {
        PanelClaims {
            raw_token: "h.p.s".into(),
            subject: "user_123".into(),
            email: Some("a@x.com".into()),
            expires_at,
        }
    }

    #[test]
    fn to_identity_maps_fields() {
        let identity = make_claims(None).to_identity();
        assert_eq!(identity.subject, "user_123");
        assert_eq!(identity.token(), Some("a@x.com"));
    }

    #[test]
    fn no_expiry_is_never_near_expiry() {
        assert!(!make_claims(None).is_near_expiry(60));
    }

    #[test]
    fn past_expiry_is_near_expiry() {
        let claims = make_claims(Some(Utc::now() - chrono::TimeDelta::seconds(10)));
        assert!(claims.is_near_expiry(60));
    }

    #[test]
    fn within_buffer_is_near_expiry() {
        let claims = make_claims(Some(Utc::now() + chrono::TimeDelta::seconds(30)));
        assert!(claims.is_near_expiry(60));
    }

    #[test]
    fn outside_buffer_is_not_near_expiry() {
        let claims = make_claims(Some(Utc::now() + chrono::TimeDelta::hours(1)));
        assert!(!claims.is_near_expiry(60));
    }
}
