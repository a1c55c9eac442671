use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::author::AuthorDisplay;

/// A question/answer pair submitted by an authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Opaque directory identifier of the submitting user. Set at
    /// creation from the caller's session, never updated.
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

/// An entry paired with its resolved author display data.
///
/// Built per list call by the enrichment join — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EnrichedFaq {
    pub entry: FaqEntry,
    pub author: AuthorDisplay,
}
