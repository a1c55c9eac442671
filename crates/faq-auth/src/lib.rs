//! # faq-auth
//!
//! Clerk-based session handling for the FAQ service.
//!
//! Resolves a session token (env var or credentials file), validates it
//! against Clerk's JWKS (`clerk-rs`), and produces an [`AuthIdentity`]
//! for the service layer. Authenticated operations are blocked here,
//! before any store mutation.

pub mod claims;
pub mod error;
pub mod jwks;
pub mod token_store;

pub use claims::SessionClaims;
pub use error::AuthError;

use faq_core::identity::AuthIdentity;

const EXPIRY_BUFFER_SECS: i64 = 60;

/// Resolve the best available session token.
///
/// Priority: env var → credentials file. Does NOT validate the token
/// (use [`resolve_identity`] for validation).
#[must_use]
pub fn resolve_token() -> Option<String> {
    token_store::load()
}

/// Full session resolution: load a token, validate it via JWKS, and
/// map the claims to an [`AuthIdentity`].
///
/// Returns `Ok(None)` when no token is stored or the stored token is
/// expired/near-expiry — the caller decides whether that blocks the
/// operation.
///
/// # Errors
///
/// Returns `AuthError` if JWKS validation encounters a network or
/// parsing error (distinct from an expired token, which is `Ok(None)`).
pub async fn resolve_identity(secret_key: &str) -> Result<Option<AuthIdentity>, AuthError> {
    let Some(jwt) = token_store::load() else {
        return Ok(None);
    };

    let claims = jwks::validate(&jwt, secret_key).await?;
    if claims.is_near_expiry(EXPIRY_BUFFER_SECS) {
        tracing::warn!(
            expires_at = %claims.expires_at,
            "session token expires within {EXPIRY_BUFFER_SECS}s — log in again",
        );
        return Ok(None);
    }

    Ok(Some(claims.to_identity()))
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot
/// be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}
