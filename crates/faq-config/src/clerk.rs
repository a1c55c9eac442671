//! Clerk authentication and directory configuration.

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.clerk.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Clerk secret key (`sk_...`). Required for directory lookups and
    /// JWKS token validation.
    #[serde(default)]
    pub secret_key: String,

    /// Backend API base URL. Overridable for tests.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClerkConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl ClerkConfig {
    /// Check if the Clerk config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }
}
