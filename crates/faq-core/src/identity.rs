use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated caller identity for cross-crate passing.
///
/// Produced by `faq-auth`, consumed by `faq-service` and `faq-cli`.
/// Contains only data fields — no auth logic, no Clerk SDK calls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Clerk user ID (from JWT `sub` claim).
    pub user_id: String,
    /// Clerk organization ID (from JWT `org_id` claim). `None` = personal session.
    pub org_id: Option<String>,
    /// Clerk organization role (from JWT `org_role` claim, e.g. `"org:admin"`).
    pub org_role: Option<String>,
}
