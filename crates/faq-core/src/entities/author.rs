use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A directory lookup result, filtered to the fields the client needs.
///
/// `username` is the primary handle; `external_username` is the handle
/// from the user's first linked external account (e.g. GitHub) and is
/// used as a fallback when no primary handle is set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthorProfile {
    pub id: String,
    pub username: Option<String>,
    pub external_username: Option<String>,
    /// Avatar URL, passed through unchanged.
    pub image_url: Option<String>,
}

/// Author identity after enrichment — the username is always present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthorDisplay {
    pub id: String,
    pub username: String,
    pub image_url: Option<String>,
}
