//! Service error taxonomy.
//!
//! Every failure surfaces with a machine-readable [`kind`](ServiceError::kind)
//! and a human-readable message. The two `Author*` variants form the
//! integrity class: persisted data inconsistent with the directory.

use thiserror::Error;

use faq_directory::DirectoryError;
use faq_store::error::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Operation requires an authenticated caller.
    #[error("not authenticated")]
    Unauthorized,

    /// The caller is authenticated but not permitted by policy.
    #[error("not permitted: {0}")]
    Forbidden(String),

    /// Input failed the service's validation contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// No entry with the given id exists.
    #[error("FAQ entry not found: {0}")]
    NotFound(String),

    /// A persisted entry's author does not resolve in the directory.
    #[error("author for entry not found. entry id: {entry_id}, author id: {author_id}")]
    AuthorNotFound { entry_id: String, author_id: String },

    /// A resolved profile has no displayable name at all.
    #[error("author has no linked account username: {author_id}")]
    AuthorUnnamed { author_id: String },

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identity directory failure.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl ServiceError {
    /// Stable machine-readable failure class.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::AuthorNotFound { .. } | Self::AuthorUnnamed { .. } => "integrity",
            Self::Store(_) => "store",
            Self::Directory(_) => "directory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_variants_share_a_kind() {
        let missing = ServiceError::AuthorNotFound {
            entry_id: "faq-1".into(),
            author_id: "user_1".into(),
        };
        let unnamed = ServiceError::AuthorUnnamed {
            author_id: "user_1".into(),
        };
        assert_eq!(missing.kind(), "integrity");
        assert_eq!(unnamed.kind(), "integrity");
    }

    #[test]
    fn messages_name_the_offending_ids() {
        let err = ServiceError::AuthorNotFound {
            entry_id: "faq-abc".into(),
            author_id: "user_xyz".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("faq-abc"));
        assert!(msg.contains("user_xyz"));
    }
}
