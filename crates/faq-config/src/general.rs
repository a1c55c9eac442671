//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default list cap.
const fn default_list_limit() -> u32 {
    100
}

/// Who is allowed to delete an entry.
///
/// The original system let any authenticated user delete any entry
/// (a moderator model). `AuthorOnly` restricts deletion to the entry's
/// author. Kept configurable until product settles the question.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    #[default]
    AnyAuthenticated,
    AuthorOnly,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Maximum entries returned by `list`.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    /// Delete authorization policy.
    #[serde(default)]
    pub delete_policy: DeletePolicy,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            delete_policy: DeletePolicy::default(),
        }
    }
}
