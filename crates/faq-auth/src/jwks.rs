use std::sync::{Arc, OnceLock};

use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;

use crate::claims::SessionClaims;
use crate::error::AuthError;

/// Process-scoped JWKS provider cache.
/// Created on first use, reused for all subsequent validations.
/// The `MemoryCacheJwksProvider` internally caches public keys for 1 hour.
///
/// **Note**: bound to the `secret_key` from the first `validate()` call.
/// Fine for the CLI (one key per process); would need rework for
/// multi-tenant server use.
static JWKS_PROVIDER: OnceLock<Arc<MemoryCacheJwksProvider>> = OnceLock::new();

fn get_or_init_provider(secret_key: &str) -> Arc<MemoryCacheJwksProvider> {
    JWKS_PROVIDER
        .get_or_init(|| {
            let config = ClerkConfiguration::new(None, None, Some(secret_key.to_string()), None);
            let clerk = Clerk::new(config);
            Arc::new(MemoryCacheJwksProvider::new(clerk))
        })
        .clone()
}

/// Validate a Clerk JWT via JWKS and extract session claims.
///
/// Uses the Clerk Backend API (via `secret_key`) to fetch and cache
/// JWKS public keys.
///
/// # Errors
///
/// Returns `AuthError::JwksValidation` if the token is invalid,
/// expired, or the JWKS endpoint is unreachable.
pub async fn validate(jwt: &str, secret_key: &str) -> Result<SessionClaims, AuthError> {
    let provider = get_or_init_provider(secret_key);
    let clerk_jwt = validate_jwt(jwt, provider)
        .await
        .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

    let expires_at = chrono::DateTime::from_timestamp(i64::from(clerk_jwt.exp), 0)
        .ok_or_else(|| AuthError::JwksValidation("invalid exp timestamp".into()))?;
    let org = clerk_jwt.org.as_ref();

    Ok(SessionClaims {
        raw_jwt: jwt.to_string(),
        user_id: clerk_jwt.sub.clone(),
        org_id: org.map(|o| o.id.clone()),
        org_role: org.map(|o| o.role.clone()),
        expires_at,
    })
}

/// Decode the JWT `exp` claim without full JWKS validation (for quick
/// expiry checks in `auth status`).
///
/// Best-effort — does NOT verify the JWT signature.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp`
/// claim is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    use base64::Engine as _;

    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}
