//! Clerk Backend API directory client.
//!
//! Calls the user list endpoint directly via `reqwest` with the Clerk
//! secret key as a bearer token. Requests are chunked at the API's
//! 110-id cap, so the caller's id list can be any size.

use faq_core::entities::AuthorProfile;
use faq_core::ids::DIRECTORY_BATCH_LIMIT;

use crate::error::DirectoryError;
use crate::profile::{ClerkUser, filter_clerk_user};
use crate::UserDirectory;

const DEFAULT_API_BASE: &str = "https://api.clerk.com";

/// Identity directory backed by the Clerk Backend API.
pub struct ClerkDirectory {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl ClerkDirectory {
    /// Create a client against the production Clerk API.
    #[must_use]
    pub fn new(secret_key: &str) -> Self {
        Self::with_api_base(secret_key, DEFAULT_API_BASE)
    }

    /// Create a client against a custom API base URL (for tests).
    #[must_use]
    pub fn with_api_base(secret_key: &str, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_chunk(&self, ids: &[String]) -> Result<Vec<AuthorProfile>, DirectoryError> {
        let query: String = ids
            .iter()
            .map(|id| format!("user_id={}", urlencoding::encode(id)))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!(
            "{}/v1/users?{query}&limit={DIRECTORY_BATCH_LIMIT}",
            self.api_base
        );

        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.secret_key))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DirectoryError::Api(format!(
                "list users: HTTP {status}: {body}"
            )));
        }

        let users: Vec<ClerkUser> = resp
            .json()
            .await
            .map_err(|e| DirectoryError::Parse(format!("list users: {e}")))?;

        Ok(users.into_iter().map(filter_clerk_user).collect())
    }
}

impl UserDirectory for ClerkDirectory {
    async fn batch_get_users(&self, ids: &[String]) -> Result<Vec<AuthorProfile>, DirectoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut profiles = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(DIRECTORY_BATCH_LIMIT) {
            tracing::debug!(chunk_len = chunk.len(), "directory batch lookup");
            profiles.extend(self.fetch_chunk(chunk).await?);
        }
        Ok(profiles)
    }
}
