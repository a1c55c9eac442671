use chrono::{DateTime, Utc};
use faq_core::identity::AuthIdentity;

/// Parsed and validated Clerk JWT claims.
///
/// Produced by JWKS validation, consumed by the CLI and the service
/// layer (as an [`AuthIdentity`]).
#[derive(Debug, Clone)]
pub struct SessionClaims {
    /// Raw JWT string.
    pub raw_jwt: String,
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    /// Organization ID (`org_id` claim). `None` if personal/no-org session.
    pub org_id: Option<String>,
    /// Organization role (`org_role` claim, e.g. `"org:admin"`).
    pub org_role: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Convert to a lightweight `AuthIdentity` for cross-crate passing.
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            org_id: self.org_id.clone(),
            org_role: self.org_role.clone(),
        }
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
        self.expires_at <= threshold
    }
}
